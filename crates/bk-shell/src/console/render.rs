//! Plain-text rendering of command results.

use std::fmt::Write;

use bk_app::QueryState;
use bk_core::dashboard::{
    BusinessHealthStatus, CashFlowSummary, DashboardSummary, DashboardWidget, Recommendation,
    Trend,
};
use bk_core::onboarding::catalog::{catalogs, EXPENSE_FREQUENCIES};
use bk_core::onboarding::{OnboardingData, OnboardingExit, WizardPhase};
use bk_core::{OnboardingStep, Route, User, WizardState};

use crate::commands::dashboard::DashboardView;
use crate::commands::navigation::Screen;

pub fn screen(screen: Screen) -> String {
    match screen {
        Screen::Loading(route) => format!("[{}] Loading...", route.path()),
        Screen::Rendered(route) => format!("[{}] {}", route.path(), page_title(route)),
        Screen::Blank => "[-]".to_string(),
    }
}

fn page_title(route: Route) -> &'static str {
    match route {
        Route::Login => "Sign in to Bossika Na Credit",
        Route::Register => "Create your account",
        Route::Onboarding => "Set up your business",
        Route::Dashboard => "Dashboard",
    }
}

pub fn user(user: &User) -> String {
    let mut out = format!("{} <{}>", user.name, user.email);
    if let Some(phone) = &user.phone {
        let _ = write!(out, " tel {phone}");
    }
    let onboarding = if user.onboarding_completed {
        "complete"
    } else {
        "pending"
    };
    let _ = write!(out, "\n  id {}, onboarding {onboarding}", user.id);
    out
}

pub fn wizard(state: &WizardState) -> String {
    let mut out = match state.phase {
        WizardPhase::Finished(OnboardingExit::Completed) => "Onboarding complete".to_string(),
        WizardPhase::Finished(OnboardingExit::Skipped) => "Onboarding skipped".to_string(),
        WizardPhase::Saving => format!("{} (saving...)", state.step),
        WizardPhase::Completing => format!("{} (completing...)", state.step),
        WizardPhase::Editing => state.step.to_string(),
    };
    if !state.is_finished() {
        let _ = write!(out, "\n  {}", progress_bar(state.step));
        let _ = write!(out, "\n  next: {}", step_hint(state.step));
    }
    if let Some(error) = &state.error {
        let _ = write!(out, "\n  error: {error}");
    }
    out
}

fn progress_bar(step: OnboardingStep) -> String {
    let done = usize::from(step.index());
    let total = usize::from(OnboardingStep::TOTAL);
    format!("[{}{}]", "#".repeat(done), ".".repeat(total - done))
}

fn step_hint(step: OnboardingStep) -> &'static str {
    match step {
        OnboardingStep::BusinessDetails => "business --name .. --type .. --industry ..",
        OnboardingStep::Goals => "goals --primary .. (or back)",
        OnboardingStep::IncomeExpense => "finances [--income N] [--expenses N] (or back)",
    }
}

pub fn onboarding_data(data: &OnboardingData) -> String {
    let mut out = format!(
        "step {} of {}, completed: {}",
        data.current_step,
        OnboardingStep::TOTAL,
        if data.completed { "yes" } else { "no" }
    );
    if let Some(details) = &data.business_details {
        let _ = write!(
            out,
            "\n  business: {} ({}, {})",
            details.business_name, details.business_type, details.industry
        );
    }
    if let Some(goals) = &data.goals {
        let _ = write!(out, "\n  primary goal: {}", goals.primary_goal);
    }
    if let Some(setup) = &data.income_expense {
        let _ = write!(
            out,
            "\n  monthly income: {}, monthly expenses: {}",
            optional_amount(setup.monthly_income),
            optional_amount(setup.monthly_expenses)
        );
    }
    out
}

fn optional_amount(amount: Option<f64>) -> String {
    amount.map_or_else(|| "-".to_string(), money)
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn catalog() -> String {
    let mut out = String::new();
    for catalog in catalogs() {
        let _ = writeln!(out, "{}: {}", catalog.label, catalog.entries.join(", "));
    }
    let frequencies: Vec<&str> = EXPENSE_FREQUENCIES.iter().map(|f| f.as_str()).collect();
    let _ = write!(out, "Expense frequencies: {}", frequencies.join(", "));
    out
}

pub fn dashboard(view: &DashboardView) -> String {
    let mut sections = Vec::with_capacity(DashboardWidget::ALL.len() + 1);
    if !view.mounted {
        sections.push("(dashboard not open, showing cached data)".to_string());
    }
    sections.push(widget(DashboardWidget::CashFlow, &view.cash_flow, cash_flow));
    sections.push(widget(
        DashboardWidget::HealthStatus,
        &view.health_status,
        health_status,
    ));
    sections.push(widget(
        DashboardWidget::Recommendations,
        &view.recommendations,
        |items| recommendations(items),
    ));
    sections.push(widget(DashboardWidget::QuickStats, &view.summary, quick_stats));
    sections.join("\n\n")
}

/// One widget: data if any (kept on refetch failure), otherwise the loading
/// or error state.
fn widget<T>(
    widget: DashboardWidget,
    state: &QueryState<T>,
    body: impl Fn(&T) -> String,
) -> String {
    let mut out = format!("== {} ==", widget.title());
    match (&state.data, &state.error) {
        (Some(data), error) => {
            let _ = write!(out, "\n{}", body(data));
            if let Some(error) = error {
                let _ = write!(out, "\n  (refresh failed: {error})");
            }
        }
        (None, Some(error)) => {
            let _ = write!(out, "\n  {error}");
        }
        (None, None) if state.is_fetching => out.push_str("\n  Loading..."),
        (None, None) => out.push_str("\n  No data yet"),
    }
    if let Some(updated_at) = state.updated_at {
        let _ = write!(out, "\n  updated {}", updated_at.format("%H:%M:%S UTC"));
    }
    out
}

fn cash_flow(summary: &CashFlowSummary) -> String {
    let arrow = match summary.trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Stable => "stable",
    };
    format!(
        "  period {}\n  income {}  expenses {}  net {}\n  trend {arrow} ({:+.1}%)",
        summary.period,
        money(summary.total_income),
        money(summary.total_expenses),
        money(summary.net_cash_flow),
        summary.change_percentage
    )
}

fn health_status(status: &BusinessHealthStatus) -> String {
    let mut out = format!("  {:?} (score {:.0}/100)", status.status, status.score);
    for factor in &status.factors {
        let _ = write!(
            out,
            "\n  - {} [{:?}]: {}",
            factor.name, factor.status, factor.message
        );
    }
    out
}

fn recommendations(items: &[Recommendation]) -> String {
    if items.is_empty() {
        return "  No recommendations right now".to_string();
    }
    items
        .iter()
        .map(|item| {
            format!(
                "  - [{:?}] {}: {}\n    {}",
                item.priority, item.title, item.description, item.action
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn quick_stats(summary: &DashboardSummary) -> String {
    let stats = &summary.quick_stats;
    format!(
        "  transactions {}  pending invoices {}\n  upcoming expenses {}  available credit {}",
        stats.total_transactions,
        stats.pending_invoices,
        money(stats.upcoming_expenses),
        money(stats.available_credit)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bk_core::dashboard::{HealthLevel, QuickStats};

    fn cash_flow_data() -> CashFlowSummary {
        CashFlowSummary {
            total_income: 1500.0,
            total_expenses: 900.5,
            net_cash_flow: 599.5,
            period: "2026-09".to_string(),
            trend: Trend::Up,
            change_percentage: 12.5,
        }
    }

    fn empty_view() -> DashboardView {
        DashboardView {
            mounted: true,
            cash_flow: QueryState::default(),
            health_status: QueryState::default(),
            recommendations: QueryState::default(),
            summary: QueryState::default(),
        }
    }

    #[test]
    fn test_widget_shows_fallback_error_without_data() {
        let mut view = empty_view();
        view.health_status.error = Some("Failed to load health status".to_string());

        let text = dashboard(&view);

        assert!(text.contains("== Business Health ==\n  Failed to load health status"));
    }

    #[test]
    fn test_widget_keeps_stale_data_on_error() {
        let mut view = empty_view();
        view.cash_flow.data = Some(cash_flow_data());
        view.cash_flow.error = Some("Failed to load cash flow data".to_string());

        let text = dashboard(&view);

        assert!(text.contains("net 599.50"));
        assert!(text.contains("(refresh failed: Failed to load cash flow data)"));
    }

    #[test]
    fn test_widget_loading_state() {
        let mut view = empty_view();
        view.recommendations.is_fetching = true;
        view.mounted = false;

        let text = dashboard(&view);

        assert!(text.starts_with("(dashboard not open"));
        assert!(text.contains("== Recommendations ==\n  Loading..."));
    }

    #[test]
    fn test_quick_stats_and_health_render() {
        let mut view = empty_view();
        let health = BusinessHealthStatus {
            status: HealthLevel::Warning,
            score: 64.0,
            factors: vec![],
        };
        view.health_status.data = Some(health.clone());
        view.summary.data = Some(DashboardSummary {
            cash_flow: cash_flow_data(),
            health_status: health,
            recommendations: vec![],
            quick_stats: QuickStats {
                total_transactions: 42,
                pending_invoices: 3,
                upcoming_expenses: 250.0,
                available_credit: 10_000.0,
            },
        });

        let text = dashboard(&view);

        assert!(text.contains("Warning (score 64/100)"));
        assert!(text.contains("transactions 42  pending invoices 3"));
        assert!(text.contains("available credit 10000.00"));
    }

    #[test]
    fn test_wizard_shows_step_progress_and_error() {
        let mut state = WizardState::new();
        state.step = OnboardingStep::Goals;
        state.error = Some("Failed to save goals".to_string());

        let text = wizard(&state);

        assert!(text.starts_with("Step 2 of 3: Business Goals"));
        assert!(text.contains("[##.]"));
        assert!(text.contains("error: Failed to save goals"));
    }

    #[test]
    fn test_finished_wizard_has_no_hint() {
        let mut state = WizardState::new();
        state.phase = WizardPhase::Finished(OnboardingExit::Skipped);

        assert_eq!(wizard(&state), "Onboarding skipped");
    }

    #[test]
    fn test_screen_lines() {
        assert_eq!(screen(Screen::Loading(Route::Dashboard)), "[/dashboard] Loading...");
        assert_eq!(screen(Screen::Rendered(Route::Login)), "[/login] Sign in to Bossika Na Credit");
    }

    #[test]
    fn test_catalog_lists_frequencies() {
        assert!(catalog().ends_with("Expense frequencies: daily, weekly, monthly, yearly"));
    }
}
