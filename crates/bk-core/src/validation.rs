//! Form validation run before any network call.
//!
//! Each validator collects every failing field instead of stopping at the
//! first one, so the shell can show all messages at once.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::identity::{LoginCredentials, RegisterCredentials};
use crate::onboarding::{BusinessDetails, BusinessGoals, IncomeExpenseSetup};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern for email")
});

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_BUSINESS_NAME_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

/// All field errors of one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: &'static str) {
        self.errors.push(FieldError {
            field: field.into(),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First message reported for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn validate_login(credentials: &LoginCredentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if !is_valid_email(&credentials.email) {
        errors.push("email", "Invalid email address");
    }
    if credentials.password.is_empty() {
        errors.push("password", "Password is required");
    }
    errors.into_result()
}

pub fn validate_register(credentials: &RegisterCredentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if credentials.name.trim().chars().count() < MIN_USERNAME_LEN {
        errors.push("name", "Username must be at least 3 characters");
    }
    if !is_valid_email(&credentials.email) {
        errors.push("email", "Invalid email address");
    }
    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("password", "Password must be at least 6 characters");
    }
    errors.into_result()
}

pub fn validate_business_details(details: &BusinessDetails) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if details.business_name.trim().chars().count() < MIN_BUSINESS_NAME_LEN {
        errors.push(
            "business_name",
            "Business name must be at least 2 characters",
        );
    }
    if details.business_type.trim().is_empty() {
        errors.push("business_type", "Please select a business type");
    }
    if details.industry.trim().is_empty() {
        errors.push("industry", "Please select an industry");
    }
    errors.into_result()
}

pub fn validate_goals(goals: &BusinessGoals) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if goals.primary_goal.trim().is_empty() {
        errors.push("primary_goal", "Please select a primary goal");
    }
    errors.into_result()
}

// NaN and infinities serialize as `null`, so they never count as amounts.
fn is_non_negative(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

pub fn validate_income_expense(setup: &IncomeExpenseSetup) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if setup.monthly_income.is_some_and(|income| !is_non_negative(income)) {
        errors.push("monthly_income", "Income must be positive");
    }
    if setup.monthly_expenses.is_some_and(|expenses| !is_non_negative(expenses)) {
        errors.push("monthly_expenses", "Expenses must be positive");
    }
    for (index, category) in setup.expense_categories.iter().flatten().enumerate() {
        if category.name.trim().is_empty() {
            errors.push(
                format!("expense_categories[{index}].name"),
                "Category name is required",
            );
        }
        if !is_non_negative(category.amount) {
            errors.push(
                format!("expense_categories[{index}].amount"),
                "Amount must be positive",
            );
        }
    }
    errors.into_result()
}
