//! Autodash backend client
//!
//! [`DashboardClient`] is the single path to the backend. Every call goes
//! through [`DashboardClient::make_request`], which resolves the lazily
//! loaded configuration, injects the bearer token, races the request
//! against its timeout and turns non-success responses into
//! [`ClientError`]s. Authentication failures also end the local session
//! (see [`session`]).

pub mod auth;
pub mod cars;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod maintenance;
pub mod query;
pub mod reports;
pub mod session;
mod timer;

pub use auth::Credentials;
pub use config::{ApiConfig, AppConfig, ConfigSource, HttpConfigSource, StaticConfig};
#[cfg(not(target_arch = "wasm32"))]
pub use config::EnvConfigSource;
pub use error::{ClientError, ErrorKind};
pub use query::{DateRange, with_query};
pub use reports::ReportKind;
pub use session::{
    DetachedNavigator, ImmediateScheduler, LogNotifier, MemoryTokenStore, Navigator, Notifier,
    Scheduler, TokenStore,
};

use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use session::Session;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

const DEFAULT_USER_AGENT: &str = concat!("autodash-client/", env!("CARGO_PKG_VERSION"));

/// Per-call options, merged over the client defaults
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Add a header; it replaces any default header of the same name
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// JSON-encode `body` as the request payload
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Override the configured timeout for this call
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Response as read off the wire, before status handling
struct RawResponse {
    status: StatusCode,
    is_json: bool,
    body: Bytes,
}

/// Autodash API client
#[derive(Clone)]
pub struct DashboardClient {
    http: Client,
    config_source: Arc<dyn ConfigSource>,
    config: Arc<OnceCell<ApiConfig>>,
    session: Session,
}

impl DashboardClient {
    /// Create a client for a fixed configuration with headless collaborators
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    /// Resolved configuration, loading it on first use
    pub async fn config(&self) -> Result<&ApiConfig, ClientError> {
        self.config
            .get_or_try_init(|| async {
                let config = self.config_source.load().await?;
                debug!(
                    base_url = %config.api.base_url(),
                    timeout_ms = config.api.timeout_ms,
                    "Client configuration loaded"
                );
                Ok(config.api)
            })
            .await
    }

    pub fn auth_token(&self) -> Option<String> {
        self.session.tokens.get()
    }

    pub fn set_auth_token(&self, token: &str) -> Result<(), ClientError> {
        self.session.tokens.set(token)
    }

    pub fn remove_auth_token(&self) {
        self.session.tokens.remove();
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        if let Some(token) = self.auth_token() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => {
                    warn!("Stored auth token is not a valid header value, sending without it");
                }
            }
        }

        headers
    }

    /// Issue a request to `endpoint` (relative to the base URL).
    ///
    /// Returns the parsed body for JSON responses and `None` for any other
    /// successful response.
    pub async fn make_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ClientError> {
        let RequestOptions {
            method,
            headers: overrides,
            body,
            timeout,
        } = options;

        let config = self.config().await?;
        let url = format!("{}{}", config.base_url(), endpoint);
        let timeout = timeout.unwrap_or_else(|| config.timeout());

        let mut headers = self.default_headers();
        headers.extend(overrides);

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        debug!(%method, %url, timeout_ms = timeout.as_millis(), "Sending request");
        let response = timer::with_timeout(timeout, async {
            let response = request.send().await?;
            let status = response.status();
            let is_json = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.contains("application/json"));
            let body = response.bytes().await?;
            Ok(RawResponse {
                status,
                is_json,
                body,
            })
        })
        .await
        .inspect_err(|err| {
            if let ClientError::Timeout(_) = err {
                warn!(%method, %url, "Request timed out");
            }
        })?;

        debug!(%method, %url, status = response.status.as_u16(), "Received response");
        self.handle_response(response)
    }

    fn handle_response<T: DeserializeOwned>(
        &self,
        response: RawResponse,
    ) -> Result<Option<T>, ClientError> {
        let RawResponse {
            status,
            is_json,
            body,
        } = response;

        if !status.is_success() {
            let error = ClientError::from_status(status, server_message(&body));
            if error.is_auth_expired() {
                self.session.expire();
            }
            return Err(error);
        }

        if !is_json {
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// GET `endpoint` and return the raw JSON body
    pub(crate) async fn get_json(&self, endpoint: &str) -> Result<Option<Value>, ClientError> {
        self.make_request(endpoint, RequestOptions::new(Method::GET)).await
    }

    /// Send `body` as JSON to `endpoint`
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.make_request(endpoint, RequestOptions::new(method).json(body)?).await
    }

    pub(crate) async fn delete_json(&self, endpoint: &str) -> Result<Option<Value>, ClientError> {
        self.make_request(endpoint, RequestOptions::new(Method::DELETE)).await
    }
}

/// Message from an error body, if it carries one.
///
/// Bodies that are not JSON are logged and treated as empty. Blank fields
/// count as missing.
fn server_message(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => ["message", "error"]
            .iter()
            .find_map(|key| {
                value
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|msg| !msg.is_empty())
            })
            .map(str::to_owned),
        Err(err) => {
            warn!(%err, "Failed to parse error response body");
            None
        }
    }
}

/// Builder for DashboardClient
#[derive(Default)]
pub struct DashboardClientBuilder {
    config_source: Option<Arc<dyn ConfigSource>>,
    tokens: Option<Arc<dyn TokenStore>>,
    navigator: Option<Arc<dyn Navigator>>,
    notifier: Option<Arc<dyn Notifier>>,
    scheduler: Option<Arc<dyn Scheduler>>,
    user_agent: Option<String>,
}

impl DashboardClientBuilder {
    /// Load configuration lazily from `source` on the first request
    #[must_use]
    pub fn config_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.config_source = Some(Arc::new(source));
        self
    }

    /// Use a fixed configuration
    #[must_use]
    pub fn config(self, config: ApiConfig) -> Self {
        self.config_source(StaticConfig::new(config))
    }

    /// Where the bearer token is persisted
    #[must_use]
    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DashboardClient, ClientError> {
        let config_source = self
            .config_source
            .ok_or_else(|| ClientError::Configuration("config source is required".into()))?;

        let http = ClientBuilder::new()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        let session = Session {
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            navigator: self
                .navigator
                .unwrap_or_else(|| Arc::new(DetachedNavigator::default())),
            notifier: self.notifier.unwrap_or_else(|| Arc::new(LogNotifier)),
            scheduler: self.scheduler.unwrap_or_else(|| Arc::new(ImmediateScheduler)),
        };

        Ok(DashboardClient {
            http,
            config_source,
            config: Arc::new(OnceCell::new()),
            session,
        })
    }
}
