//! Client configuration and the sources it is loaded from

use super::ClientError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout used when the configuration does not name one
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Application configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    #[serde(alias = "base_url", alias = "baseurl")]
    pub base_url: String,
    /// Request timeout in milliseconds
    #[serde(rename = "timeout", default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl From<ApiConfig> for AppConfig {
    fn from(api: ApiConfig) -> Self {
        Self { api }
    }
}

/// Asynchronous provider of the application configuration
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ConfigSource: Send + Sync {
    async fn load(&self) -> Result<AppConfig, ClientError>;
}

/// Configuration known up front
#[derive(Debug, Clone)]
pub struct StaticConfig(AppConfig);

impl StaticConfig {
    pub fn new(config: impl Into<AppConfig>) -> Self {
        Self(config.into())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ConfigSource for StaticConfig {
    async fn load(&self) -> Result<AppConfig, ClientError> {
        Ok(self.0.clone())
    }
}

/// Configuration fetched as a JSON document, e.g. `/config.json` served next to the app
#[derive(Debug, Clone)]
pub struct HttpConfigSource {
    client: reqwest::Client,
    url: String,
}

impl HttpConfigSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ConfigSource for HttpConfigSource {
    async fn load(&self) -> Result<AppConfig, ClientError> {
        debug!(url = %self.url, "Loading client configuration");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Configuration(format!(
                "failed to load {}: HTTP {}",
                self.url,
                status.as_u16()
            )));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            ClientError::Configuration(format!("invalid document at {}: {e}", self.url))
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use layered::EnvConfigSource;

#[cfg(not(target_arch = "wasm32"))]
mod layered {
    use super::{AppConfig, ClientError, ConfigSource, DEFAULT_TIMEOUT_MS};
    use async_trait::async_trait;
    use config::{Config, ConfigError, Environment, File};
    use std::path::PathBuf;

    /// Layered configuration: defaults, then an optional file, then the environment
    ///
    /// With the default prefix, `AUTODASH__API__BASE_URL` and
    /// `AUTODASH__API__TIMEOUT` override the file.
    #[derive(Debug, Clone)]
    pub struct EnvConfigSource {
        file: Option<PathBuf>,
        prefix: String,
    }

    impl Default for EnvConfigSource {
        fn default() -> Self {
            Self {
                file: None,
                prefix: "AUTODASH".into(),
            }
        }
    }

    impl EnvConfigSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Read a TOML, YAML or JSON file before the environment
        #[must_use]
        pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
            self.file = Some(path.into());
            self
        }

        #[must_use]
        pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
            self.prefix = prefix.into();
            self
        }

        pub fn load_sync(&self) -> Result<AppConfig, ClientError> {
            let mut builder = Config::builder()
                .set_default("api.timeout", DEFAULT_TIMEOUT_MS)
                .map_err(config_error)?;

            if let Some(path) = &self.file {
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }

            builder = builder.add_source(
                Environment::with_prefix(&self.prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

            let config = builder.build().map_err(config_error)?;
            config.try_deserialize().map_err(config_error)
        }
    }

    fn config_error(err: ConfigError) -> ClientError {
        ClientError::Configuration(err.to_string())
    }

    #[async_trait]
    impl ConfigSource for EnvConfigSource {
        async fn load(&self) -> Result<AppConfig, ClientError> {
            self.load_sync()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_document() {
        let config: AppConfig = serde_json::from_str(
            r#"{"api": {"baseUrl": "https://dash.example.com/api/", "timeout": 5000}}"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url(), "https://dash.example.com/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn timeout_defaults_when_missing() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api": {"base_url": "http://localhost:3000"}}"#).unwrap();
        assert_eq!(config.api.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn layered_source_reads_file_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autodash.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://localhost:9000/api\"\n").unwrap();

        let config = EnvConfigSource::new()
            .with_prefix("AUTODASH_LAYERED_TEST")
            .with_file(&path)
            .load_sync()
            .unwrap();

        assert_eq!(config.api.base_url(), "http://localhost:9000/api");
        assert_eq!(config.api.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn layered_source_requires_base_url() {
        let result = EnvConfigSource::new()
            .with_prefix("AUTODASH_MISSING_TEST")
            .load_sync();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }
}
