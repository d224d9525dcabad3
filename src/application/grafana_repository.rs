// Repository trait for monitoring service access
use crate::domain::alert::{AlertDetail, AlertSummary};
use crate::domain::dashboard::DashboardLookup;
use crate::domain::error::DocsResult;
use async_trait::async_trait;

#[async_trait]
pub trait GrafanaRepository: Send + Sync {
    /// List every configured alert
    async fn list_alerts(&self) -> DocsResult<Vec<AlertSummary>>;

    /// Fetch a dashboard and its relative URL by uid
    async fn get_dashboard(&self, uid: &str) -> DocsResult<DashboardLookup>;

    /// Fetch the full definition of a single alert
    async fn get_alert(&self, id: i64) -> DocsResult<AlertDetail>;
}
