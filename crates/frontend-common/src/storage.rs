//! Bearer token persistence in `localStorage`

use crate::config::FrontendConfig;
use autodash_http::client::{ClientError, TokenStore};
use gloo::storage::{LocalStorage, Storage};
use tracing::warn;

/// Token store backed by the origin's `localStorage`.
///
/// The token is stored as a bare string (not JSON-encoded) so other
/// scripts on the page read the same value.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

impl LocalStorageTokenStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new(FrontendConfig::AUTH_TOKEN_KEY)
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        LocalStorage::raw().get_item(self.key).ok().flatten()
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        LocalStorage::raw()
            .set_item(self.key, token)
            .map_err(|err| ClientError::Storage(format!("{err:?}")))
    }

    fn remove(&self) {
        if let Err(err) = LocalStorage::raw().remove_item(self.key) {
            warn!(?err, key = self.key, "Failed to remove auth token");
        }
    }
}
