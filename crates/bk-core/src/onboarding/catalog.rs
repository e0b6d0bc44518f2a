//! Choices offered by the onboarding forms.

use super::ExpenseFrequency;

pub const BUSINESS_TYPES: &[&str] = &[
    "Sole Proprietorship",
    "Partnership",
    "Limited Company",
    "Corporation",
    "Other",
];

pub const INDUSTRIES: &[&str] = &[
    "Retail",
    "Services",
    "Manufacturing",
    "Technology",
    "Healthcare",
    "Education",
    "Food & Beverage",
    "Construction",
    "Other",
];

pub const PRIMARY_GOALS: &[&str] = &[
    "Increase Revenue",
    "Improve Cash Flow",
    "Reduce Expenses",
    "Expand Business",
    "Get Credit",
];

pub const ADDITIONAL_GOALS: &[&str] = &[
    "Better Financial Planning",
    "Track Expenses",
    "Invoice Management",
    "Tax Planning",
    "Build Credit Score",
];

pub const EXPENSE_FREQUENCIES: [ExpenseFrequency; 4] = ExpenseFrequency::ALL;

/// A named list of choices, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub label: &'static str,
    pub entries: &'static [&'static str],
}

pub fn catalogs() -> [Catalog; 4] {
    [
        Catalog {
            label: "Business types",
            entries: BUSINESS_TYPES,
        },
        Catalog {
            label: "Industries",
            entries: INDUSTRIES,
        },
        Catalog {
            label: "Primary goals",
            entries: PRIMARY_GOALS,
        },
        Catalog {
            label: "Additional goals",
            entries: ADDITIONAL_GOALS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_non_empty_and_end_with_other_where_expected() {
        for catalog in catalogs() {
            assert!(!catalog.entries.is_empty(), "{} is empty", catalog.label);
        }
        assert_eq!(BUSINESS_TYPES.last(), Some(&"Other"));
        assert_eq!(INDUSTRIES.last(), Some(&"Other"));
    }
}
