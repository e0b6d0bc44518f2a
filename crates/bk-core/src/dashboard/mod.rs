//! Dashboard read models and widget descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_cash_flow: f64,
    pub period: String,
    pub trend: Trend,
    pub change_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLevel {
    Healthy,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFactor {
    pub name: String,
    pub status: FactorStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessHealthStatus {
    pub status: HealthLevel,
    pub score: f64,
    #[serde(default)]
    pub factors: Vec<HealthFactor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub action: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStats {
    pub total_transactions: u64,
    pub pending_invoices: u64,
    pub upcoming_expenses: f64,
    pub available_credit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub cash_flow: CashFlowSummary,
    pub health_status: BusinessHealthStatus,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    pub quick_stats: QuickStats,
}

/// Independently polled dashboard widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardWidget {
    CashFlow,
    HealthStatus,
    Recommendations,
    /// Quick stats are read from the dashboard summary.
    QuickStats,
}

const STANDARD_REFRESH: Duration = Duration::from_secs(60);
const RECOMMENDATIONS_REFRESH: Duration = Duration::from_secs(300);

impl DashboardWidget {
    pub const ALL: [DashboardWidget; 4] = [
        DashboardWidget::CashFlow,
        DashboardWidget::HealthStatus,
        DashboardWidget::Recommendations,
        DashboardWidget::QuickStats,
    ];

    /// Cache key; one cache per key, never shared between widgets.
    pub fn query_key(self) -> &'static str {
        match self {
            DashboardWidget::CashFlow => "cashFlowSummary",
            DashboardWidget::HealthStatus => "healthStatus",
            DashboardWidget::Recommendations => "recommendations",
            DashboardWidget::QuickStats => "dashboardSummary",
        }
    }

    pub fn refresh_interval(self) -> Duration {
        match self {
            DashboardWidget::Recommendations => RECOMMENDATIONS_REFRESH,
            _ => STANDARD_REFRESH,
        }
    }

    pub fn fallback_message(self) -> &'static str {
        match self {
            DashboardWidget::CashFlow => "Failed to load cash flow data",
            DashboardWidget::HealthStatus => "Failed to load health status",
            DashboardWidget::Recommendations => "Failed to load recommendations",
            DashboardWidget::QuickStats => "Failed to load dashboard summary",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DashboardWidget::CashFlow => "Cash Flow",
            DashboardWidget::HealthStatus => "Business Health",
            DashboardWidget::Recommendations => "Recommendations",
            DashboardWidget::QuickStats => "Quick Stats",
        }
    }
}

impl fmt::Display for DashboardWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}
