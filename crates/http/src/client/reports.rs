//! Report API client methods

use super::{ClientError, DashboardClient, DateRange, with_query};
use serde_json::Value;
use std::fmt;

/// Reports the backend can produce over a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Inventory,
    Sales,
    Maintenance,
    Profit,
}

impl ReportKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Sales => "sales",
            Self::Maintenance => "maintenance",
            Self::Profit => "profit",
        }
    }

    pub fn path(self) -> String {
        format!("/reports/{}", self.as_str())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DashboardClient {
    /// Fetch a report; only the bounds set in `range` are sent
    pub async fn report(
        &self,
        kind: ReportKind,
        range: &DateRange,
    ) -> Result<Option<Value>, ClientError> {
        self.get_json(&with_query(&kind.path(), range.query_pairs())).await
    }

    pub async fn inventory_report(&self, range: &DateRange) -> Result<Option<Value>, ClientError> {
        self.report(ReportKind::Inventory, range).await
    }

    pub async fn sales_report(&self, range: &DateRange) -> Result<Option<Value>, ClientError> {
        self.report(ReportKind::Sales, range).await
    }

    pub async fn maintenance_report(
        &self,
        range: &DateRange,
    ) -> Result<Option<Value>, ClientError> {
        self.report(ReportKind::Maintenance, range).await
    }

    pub async fn profit_report(&self, range: &DateRange) -> Result<Option<Value>, ClientError> {
        self.report(ReportKind::Profit, range).await
    }
}
