//! Frontend configuration

/// Browser-side constants
pub struct FrontendConfig;

impl FrontendConfig {
    /// Local storage key for the bearer token
    pub const AUTH_TOKEN_KEY: &'static str = "authToken";

    /// Configuration document, relative to the page origin
    pub const CONFIG_PATH: &'static str = "/config.json";
}
