use bk_app::QueryState;
use bk_core::dashboard::{BusinessHealthStatus, CashFlowSummary, DashboardSummary, Recommendation};

use crate::bootstrap::AppRuntime;

/// Point-in-time copy of every widget cache.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub mounted: bool,
    pub cash_flow: QueryState<CashFlowSummary>,
    pub health_status: QueryState<BusinessHealthStatus>,
    pub recommendations: QueryState<Vec<Recommendation>>,
    pub summary: QueryState<DashboardSummary>,
}

pub async fn view(runtime: &AppRuntime) -> DashboardView {
    let queries = runtime.dashboard_queries();
    DashboardView {
        mounted: runtime.is_dashboard_mounted().await,
        cash_flow: queries.cash_flow.snapshot(),
        health_status: queries.health_status.snapshot(),
        recommendations: queries.recommendations.snapshot(),
        summary: queries.summary.snapshot(),
    }
}
