//! Console line grammar.
//!
//! A line is tokenized with `shell_words` (so quoted values may contain
//! spaces) and parsed by clap into a [`ConsoleCommand`].

use clap::{Args, Parser, Subcommand};

use bk_core::onboarding::{
    BusinessDetails, BusinessGoals, ExpenseCategory, ExpenseFrequency, IncomeExpenseSetup,
};
use bk_core::Route;

#[derive(Debug, Parser)]
#[command(
    name = "bossika",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
struct ConsoleLine {
    #[command(subcommand)]
    command: ConsoleCommand,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ConsoleCommand {
    /// Sign in with e-mail and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Sign out and forget stored credentials
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Navigate to a page: login, register, onboarding or dashboard
    Open { route: Route },
    /// Onboarding step 1: business details
    Business(BusinessArgs),
    /// Onboarding step 2: goals
    Goals(GoalsArgs),
    /// Onboarding step 3: income and expenses
    Finances(FinancesArgs),
    /// Return to the previous onboarding step
    Back,
    /// Leave onboarding without completing it
    Skip,
    /// Show the onboarding wizard state
    Wizard,
    /// Fetch onboarding progress from the server
    OnboardingStatus,
    /// Show the dashboard widgets
    Dashboard,
    /// List the choices offered by the onboarding forms
    Catalog,
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct BusinessArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long = "type")]
    pub business_type: String,
    #[arg(long)]
    pub industry: String,
    #[arg(long)]
    pub registration_number: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
}

impl From<BusinessArgs> for BusinessDetails {
    fn from(args: BusinessArgs) -> Self {
        BusinessDetails {
            business_name: args.name,
            business_type: args.business_type,
            industry: args.industry,
            registration_number: args.registration_number,
            address: args.address,
            city: args.city,
            country: args.country,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct GoalsArgs {
    #[arg(long)]
    pub primary: String,
    #[arg(long)]
    pub target_revenue: Option<f64>,
    #[arg(long)]
    pub target_profit: Option<f64>,
    #[arg(long)]
    pub time_frame: Option<String>,
    /// Repeat for several goals
    #[arg(long = "additional")]
    pub additional: Vec<String>,
}

impl From<GoalsArgs> for BusinessGoals {
    fn from(args: GoalsArgs) -> Self {
        BusinessGoals {
            primary_goal: args.primary,
            target_revenue: args.target_revenue,
            target_profit: args.target_profit,
            time_frame: args.time_frame,
            additional_goals: non_empty(args.additional),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct FinancesArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub income: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub expenses: Option<f64>,
    /// Repeat for several income sources
    #[arg(long = "source")]
    pub sources: Vec<String>,
    /// `name:amount:frequency`, repeatable
    #[arg(long = "category", value_parser = parse_category)]
    pub categories: Vec<ExpenseCategory>,
}

impl From<FinancesArgs> for IncomeExpenseSetup {
    fn from(args: FinancesArgs) -> Self {
        IncomeExpenseSetup {
            monthly_income: args.income,
            income_sources: non_empty(args.sources),
            monthly_expenses: args.expenses,
            expense_categories: non_empty(args.categories),
        }
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    (!values.is_empty()).then_some(values)
}

/// Parse `name:amount:frequency`. The name may itself contain colons.
fn parse_category(raw: &str) -> Result<ExpenseCategory, String> {
    let mut parts = raw.rsplitn(3, ':');
    let (Some(frequency), Some(amount), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected name:amount:frequency, got '{raw}'"));
    };
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid amount '{amount}': {e}"))?;
    let frequency = frequency
        .parse::<ExpenseFrequency>()
        .map_err(|e| e.to_string())?;
    Ok(ExpenseCategory {
        name: name.trim().to_string(),
        amount,
        frequency,
    })
}

/// Why a console line could not be turned into a command.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to parse arguments: {0}")]
    Tokenize(#[from] shell_words::ParseError),

    /// Also carries clap's rendered help and usage output.
    #[error("{0}")]
    Clap(#[from] clap::Error),
}

impl ParseError {
    /// `true` when clap produced help text rather than a usage error.
    pub fn is_help(&self) -> bool {
        matches!(
            self,
            ParseError::Clap(err) if err.kind() == clap::error::ErrorKind::DisplayHelp
                || err.kind() == clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    }
}

/// Parse one console line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, ParseError> {
    let tokens = shell_words::split(line.trim())?;
    if tokens.is_empty() {
        return Ok(None);
    }
    let parsed = ConsoleLine::try_parse_from(tokens)?;
    Ok(Some(parsed.command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ConsoleCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line_is_not_a_command() {
        assert!(parse_line("   ").unwrap().is_none());
    }

    #[test]
    fn test_login_accepts_quoted_password() {
        let command = parse(r#"login --email ama@shop.gh --password "pass word""#);
        assert_eq!(
            command,
            ConsoleCommand::Login {
                email: "ama@shop.gh".to_string(),
                password: "pass word".to_string(),
            }
        );
    }

    #[test]
    fn test_register_phone_is_optional() {
        let command = parse("register --name Ama --email ama@shop.gh --password secret1");
        assert!(matches!(command, ConsoleCommand::Register { phone: None, .. }));
    }

    #[test]
    fn test_open_parses_route_with_or_without_slash() {
        assert_eq!(parse("open dashboard"), ConsoleCommand::Open { route: Route::Dashboard });
        assert_eq!(parse("open /onboarding"), ConsoleCommand::Open { route: Route::Onboarding });
        assert!(parse_line("open settings").is_err());
    }

    #[test]
    fn test_business_maps_type_flag() {
        let ConsoleCommand::Business(args) =
            parse(r#"business --name "Ama's Shop" --type retail --industry "Food & Beverage""#)
        else {
            panic!("expected business command");
        };
        let details = BusinessDetails::from(args);
        assert_eq!(details.business_name, "Ama's Shop");
        assert_eq!(details.business_type, "retail");
        assert_eq!(details.industry, "Food & Beverage");
        assert_eq!(details.city, None);
    }

    #[test]
    fn test_goals_collects_repeated_additional() {
        let ConsoleCommand::Goals(args) = parse(
            "goals --primary grow --target-revenue 50000 --additional hire --additional expand",
        ) else {
            panic!("expected goals command");
        };
        let goals = BusinessGoals::from(args);
        assert_eq!(goals.target_revenue, Some(50_000.0));
        assert_eq!(
            goals.additional_goals,
            Some(vec!["hire".to_string(), "expand".to_string()])
        );
        assert_eq!(goals.target_profit, None);
    }

    #[test]
    fn test_finances_parses_categories() {
        let ConsoleCommand::Finances(args) = parse(
            r#"finances --income 1200 --category "Rent:400:monthly" --category "a:b:25.5:Weekly""#,
        ) else {
            panic!("expected finances command");
        };
        let setup = IncomeExpenseSetup::from(args);
        let categories = setup.expense_categories.unwrap();
        assert_eq!(categories[0].name, "Rent");
        assert_eq!(categories[0].amount, 400.0);
        assert_eq!(categories[0].frequency, ExpenseFrequency::Monthly);
        assert_eq!(categories[1].name, "a:b");
        assert_eq!(categories[1].frequency, ExpenseFrequency::Weekly);
        assert_eq!(setup.income_sources, None);
    }

    #[test]
    fn test_finances_keeps_negative_amounts_for_validation() {
        let ConsoleCommand::Finances(args) = parse("finances --income -5") else {
            panic!("expected finances command");
        };
        assert_eq!(args.income, Some(-5.0));
    }

    #[test]
    fn test_bad_category_is_rejected() {
        assert!(parse_line("finances --category rent:lots:monthly").is_err());
        assert!(parse_line("finances --category rent:10:hourly").is_err());
        assert!(parse_line("finances --category rent").is_err());
    }

    #[test]
    fn test_exit_is_alias_for_quit() {
        assert_eq!(parse("exit"), ConsoleCommand::Quit);
        assert_eq!(parse("onboarding-status"), ConsoleCommand::OnboardingStatus);
    }

    #[test]
    fn test_help_is_reported_as_help() {
        let err = parse_line("help").unwrap_err();
        assert!(err.is_help());
        assert!(err.to_string().contains("login"));
    }

    #[test]
    fn test_unterminated_quote_is_tokenize_error() {
        let err = parse_line(r#"login --email "oops"#).unwrap_err();
        assert!(matches!(err, ParseError::Tokenize(_)));
    }
}
