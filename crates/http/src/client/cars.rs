//! Car inventory API client methods

use super::{ClientError, DashboardClient, with_query};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

impl DashboardClient {
    /// List cars, filtered by `params` (e.g. `[("make", "Honda")]`)
    pub async fn cars<I, K, V>(&self, params: I) -> Result<Option<Value>, ClientError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.get_json(&with_query("/cars", params)).await
    }

    pub async fn car(&self, id: impl Display) -> Result<Option<Value>, ClientError> {
        self.get_json(&format!("/cars/{id}")).await
    }

    pub async fn create_car<B: Serialize + ?Sized>(
        &self,
        car: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.send_json(Method::POST, "/cars", car).await
    }

    pub async fn update_car<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        car: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.send_json(Method::PUT, &format!("/cars/{id}"), car).await
    }

    pub async fn delete_car(&self, id: impl Display) -> Result<Option<Value>, ClientError> {
        self.delete_json(&format!("/cars/{id}")).await
    }
}
