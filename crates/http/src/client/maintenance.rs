//! Maintenance record API client methods

use super::{ClientError, DashboardClient, with_query};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

impl DashboardClient {
    /// List maintenance records, filtered by `params`
    pub async fn maintenance_records<I, K, V>(
        &self,
        params: I,
    ) -> Result<Option<Value>, ClientError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.get_json(&with_query("/maintenance", params)).await
    }

    /// Maintenance history of a single car
    pub async fn car_maintenance(
        &self,
        car_id: impl Display,
    ) -> Result<Option<Value>, ClientError> {
        self.get_json(&format!("/maintenance/car/{car_id}")).await
    }

    pub async fn maintenance_record(
        &self,
        id: impl Display,
    ) -> Result<Option<Value>, ClientError> {
        self.get_json(&format!("/maintenance/{id}")).await
    }

    pub async fn create_maintenance<B: Serialize + ?Sized>(
        &self,
        record: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.send_json(Method::POST, "/maintenance", record).await
    }

    pub async fn update_maintenance<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        record: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.send_json(Method::PUT, &format!("/maintenance/{id}"), record).await
    }

    pub async fn delete_maintenance(
        &self,
        id: impl Display,
    ) -> Result<Option<Value>, ClientError> {
        self.delete_json(&format!("/maintenance/{id}")).await
    }

    pub async fn maintenance_categories(&self) -> Result<Option<Value>, ClientError> {
        self.get_json("/maintenance/categories").await
    }
}
