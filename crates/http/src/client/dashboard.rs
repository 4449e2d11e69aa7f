//! Dashboard API client methods

use super::{ClientError, DashboardClient};
use serde_json::Value;

impl DashboardClient {
    /// Headline figures for the dashboard
    pub async fn dashboard_summary(&self) -> Result<Option<Value>, ClientError> {
        self.get_json("/dashboard/summary").await
    }

    pub async fn top_sold_models(&self) -> Result<Option<Value>, ClientError> {
        self.get_json("/dashboard/top-sold-models").await
    }
}
