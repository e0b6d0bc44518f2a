//! Dashboard read endpoints (`/dashboard/*`).

use async_trait::async_trait;

use crate::dashboard::{BusinessHealthStatus, CashFlowSummary, DashboardSummary, Recommendation};
use crate::ports::errors::ApiError;

#[async_trait]
pub trait DashboardApiPort: Send + Sync {
    async fn summary(&self) -> Result<DashboardSummary, ApiError>;

    /// `period` is passed through as the `period` query parameter.
    async fn cash_flow(&self, period: Option<&str>) -> Result<CashFlowSummary, ApiError>;

    async fn health_status(&self) -> Result<BusinessHealthStatus, ApiError>;

    async fn recommendations(&self) -> Result<Vec<Recommendation>, ApiError>;
}
