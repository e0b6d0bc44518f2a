//! Onboarding domain: wire payloads, the step enum and the wizard state machine.

pub mod catalog;
pub mod state_machine;

pub use state_machine::{
    OnboardingAction, OnboardingEvent, OnboardingExit, OnboardingStateMachine, StepPayload,
    WizardPhase, WizardState,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    BusinessDetails,
    Goals,
    IncomeExpense,
}

impl OnboardingStep {
    pub const TOTAL: u8 = 3;

    /// 1-based index as shown to the user.
    pub fn index(self) -> u8 {
        match self {
            OnboardingStep::BusinessDetails => 1,
            OnboardingStep::Goals => 2,
            OnboardingStep::IncomeExpense => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(OnboardingStep::BusinessDetails),
            2 => Some(OnboardingStep::Goals),
            3 => Some(OnboardingStep::IncomeExpense),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Previous step, saturating at the first one.
    pub fn previous(self) -> Self {
        Self::from_index(self.index().saturating_sub(1)).unwrap_or(OnboardingStep::BusinessDetails)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::BusinessDetails => "Business Details",
            OnboardingStep::Goals => "Business Goals",
            OnboardingStep::IncomeExpense => "Income & Expenses",
        }
    }

    /// Fallback display message when persisting this step fails.
    pub fn save_failure_message(self) -> &'static str {
        match self {
            OnboardingStep::BusinessDetails => "Failed to save business details",
            OnboardingStep::Goals => "Failed to save goals",
            OnboardingStep::IncomeExpense => COMPLETE_FAILURE_MESSAGE,
        }
    }
}

pub const COMPLETE_FAILURE_MESSAGE: &str = "Failed to complete onboarding";

impl Default for OnboardingStep {
    fn default() -> Self {
        OnboardingStep::BusinessDetails
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.index(), Self::TOTAL, self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetails {
    pub business_name: String,
    pub business_type: String,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessGoals {
    pub primary_goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_profit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_frame: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_goals: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ExpenseFrequency {
    pub const ALL: [ExpenseFrequency; 4] = [
        ExpenseFrequency::Daily,
        ExpenseFrequency::Weekly,
        ExpenseFrequency::Monthly,
        ExpenseFrequency::Yearly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseFrequency::Daily => "daily",
            ExpenseFrequency::Weekly => "weekly",
            ExpenseFrequency::Monthly => "monthly",
            ExpenseFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ExpenseFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown expense frequency '{0}', expected daily, weekly, monthly or yearly")]
pub struct UnknownFrequency(pub String);

impl FromStr for ExpenseFrequency {
    type Err = UnknownFrequency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == wanted)
            .ok_or_else(|| UnknownFrequency(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub name: String,
    pub amount: f64,
    pub frequency: ExpenseFrequency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeExpenseSetup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_expenses: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_categories: Option<Vec<ExpenseCategory>>,
}

/// Onboarding progress as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingData {
    #[serde(default)]
    pub business_details: Option<BusinessDetails>,
    #[serde(default)]
    pub goals: Option<BusinessGoals>,
    #[serde(default)]
    pub income_expense: Option<IncomeExpenseSetup>,
    pub current_step: u8,
    pub completed: bool,
}

/// Acknowledgement returned by onboarding writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
