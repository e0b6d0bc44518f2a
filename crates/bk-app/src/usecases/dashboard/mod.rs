//! Dashboard widgets: one stale-while-revalidate cache and one poller each.

mod poller;
mod query_cache;

pub use poller::{refresh_once, PollerHandle};
pub use query_cache::{QueryCache, QueryState};

use std::sync::Arc;

use tracing::info;

use bk_core::dashboard::{
    BusinessHealthStatus, CashFlowSummary, DashboardSummary, DashboardWidget, Recommendation,
};
use bk_core::ports::DashboardApiPort;

/// Per-widget caches. Owned by the runtime so they outlive any mount.
#[derive(Clone)]
pub struct DashboardQueries {
    pub cash_flow: QueryCache<CashFlowSummary>,
    pub health_status: QueryCache<BusinessHealthStatus>,
    pub recommendations: QueryCache<Vec<Recommendation>>,
    pub summary: QueryCache<DashboardSummary>,
}

impl DashboardQueries {
    pub fn new() -> Self {
        Self {
            cash_flow: QueryCache::new(DashboardWidget::CashFlow.query_key()),
            health_status: QueryCache::new(DashboardWidget::HealthStatus.query_key()),
            recommendations: QueryCache::new(DashboardWidget::Recommendations.query_key()),
            summary: QueryCache::new(DashboardWidget::QuickStats.query_key()),
        }
    }
}

impl Default for DashboardQueries {
    fn default() -> Self {
        Self::new()
    }
}

/// Live pollers for a mounted dashboard. Dropping it unmounts every widget.
pub struct MountedDashboard {
    pollers: Vec<PollerHandle>,
}

impl MountedDashboard {
    /// Start one independent poller per widget.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(api: Arc<dyn DashboardApiPort>, queries: &DashboardQueries) -> Self {
        let pollers = vec![
            PollerHandle::spawn(DashboardWidget::CashFlow, queries.cash_flow.clone(), {
                let api = api.clone();
                move || {
                    let api = api.clone();
                    async move { api.cash_flow(None).await }
                }
            }),
            PollerHandle::spawn(
                DashboardWidget::HealthStatus,
                queries.health_status.clone(),
                {
                    let api = api.clone();
                    move || {
                        let api = api.clone();
                        async move { api.health_status().await }
                    }
                },
            ),
            PollerHandle::spawn(
                DashboardWidget::Recommendations,
                queries.recommendations.clone(),
                {
                    let api = api.clone();
                    move || {
                        let api = api.clone();
                        async move { api.recommendations().await }
                    }
                },
            ),
            PollerHandle::spawn(DashboardWidget::QuickStats, queries.summary.clone(), {
                let api = api.clone();
                move || {
                    let api = api.clone();
                    async move { api.summary().await }
                }
            }),
        ];
        info!(widgets = pollers.len(), "dashboard mounted");
        Self { pollers }
    }

    pub fn widgets(&self) -> impl Iterator<Item = DashboardWidget> + '_ {
        self.pollers.iter().map(PollerHandle::widget)
    }
}

impl Drop for MountedDashboard {
    fn drop(&mut self) {
        info!("dashboard unmounted");
    }
}
