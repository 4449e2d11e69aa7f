//! Authentication API client methods

use super::{ClientError, DashboardClient, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Username/password login body
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DashboardClient {
    /// Log in; a `token` in the response is stored for later requests
    pub async fn login<C: Serialize + ?Sized>(
        &self,
        credentials: &C,
    ) -> Result<Option<Value>, ClientError> {
        let response = self
            .send_json(Method::POST, "/auth/login", credentials)
            .await?;

        if let Some(token) = response
            .as_ref()
            .and_then(|body| body.get("token"))
            .and_then(Value::as_str)
        {
            self.set_auth_token(token)?;
            info!("Logged in, auth token stored");
        }

        Ok(response)
    }

    /// Log out on the backend if possible; the local token is always cleared
    pub async fn logout(&self) {
        let result = self
            .make_request::<Value>("/auth/logout", RequestOptions::new(Method::POST))
            .await;
        self.remove_auth_token();

        if let Err(err) = result {
            warn!(%err, "Logout request failed, local session cleared anyway");
        }
    }
}
