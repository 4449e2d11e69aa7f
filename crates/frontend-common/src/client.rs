//! Client construction for the page

use crate::config::FrontendConfig;
use crate::navigation::{BrowserNavigator, BrowserScheduler};
use crate::notify::CallbackNotifier;
use crate::storage::LocalStorageTokenStore;
pub use autodash_http::client::ClientError;
use autodash_http::client::{DashboardClient, HttpConfigSource};
use std::sync::Arc;
use web_sys::window;

/// Origin of the current page, or an empty string outside a browser
fn get_base_url() -> String {
    window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Absolute URL of the configuration document
pub fn config_url() -> String {
    format!("{}{}", get_base_url(), FrontendConfig::CONFIG_PATH)
}

/// Create the page's API client.
///
/// Configuration is fetched from [`config_url`] on the first request. The
/// client is cheap to clone; create it once at startup and hand it to
/// whatever needs it.
pub fn create_client() -> Result<DashboardClient, ClientError> {
    DashboardClient::builder()
        .config_source(HttpConfigSource::new(config_url()))
        .token_store(Arc::new(LocalStorageTokenStore::default()))
        .navigator(Arc::new(BrowserNavigator))
        .notifier(Arc::new(CallbackNotifier))
        .scheduler(Arc::new(BrowserScheduler))
        .build()
}
