//! Interactive console standing in for the web page.

pub mod parser;
pub mod render;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use bk_core::security::SecretString;

use crate::bootstrap::AppRuntime;
use crate::commands::{auth, dashboard, navigation, onboarding};

pub use parser::{parse_line, ConsoleCommand, ParseError};

const PROMPT: &str = "bossika> ";

/// Result of executing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub output: String,
    pub quit: bool,
}

impl LineOutcome {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// Parse and run one line, then settle navigation.
pub async fn execute_line(runtime: &AppRuntime, line: &str) -> LineOutcome {
    let command = match parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return LineOutcome::print(""),
        Err(err) => return LineOutcome::print(err.to_string().trim_end().to_string()),
    };
    execute(runtime, command).await
}

pub async fn execute(runtime: &AppRuntime, command: ConsoleCommand) -> LineOutcome {
    let before = runtime.current_route();
    let body = match command {
        ConsoleCommand::Quit => {
            return LineOutcome {
                output: "Bye".to_string(),
                quit: true,
            }
        }
        ConsoleCommand::Login { email, password } => {
            auth::login(runtime, email, SecretString::new(password))
                .await
                .map(|user| format!("Welcome back, {}", user.name))
        }
        ConsoleCommand::Register {
            name,
            email,
            password,
            phone,
        } => auth::register(runtime, name, email, SecretString::new(password), phone)
            .await
            .map(|user| format!("Account created for {}", user.name)),
        ConsoleCommand::Logout => {
            auth::logout(runtime).await;
            Ok("Signed out".to_string())
        }
        ConsoleCommand::Whoami => Ok(auth::whoami(runtime)
            .map(|user| render::user(&user))
            .unwrap_or_else(|| "Not signed in".to_string())),
        ConsoleCommand::Open { route } => {
            navigation::open(runtime, route).await;
            Ok(String::new())
        }
        ConsoleCommand::Business(args) => {
            onboarding::submit_business_details(runtime, args.into())
                .await
                .map(|state| render::wizard(&state))
        }
        ConsoleCommand::Goals(args) => onboarding::submit_goals(runtime, args.into())
            .await
            .map(|state| render::wizard(&state)),
        ConsoleCommand::Finances(args) => onboarding::submit_income_expense(runtime, args.into())
            .await
            .map(|state| render::wizard(&state)),
        ConsoleCommand::Back => onboarding::back(runtime)
            .await
            .map(|state| render::wizard(&state)),
        ConsoleCommand::Skip => onboarding::skip(runtime)
            .await
            .map(|state| render::wizard(&state)),
        ConsoleCommand::Wizard => Ok(render::wizard(&onboarding::wizard_state(runtime).await)),
        ConsoleCommand::OnboardingStatus => onboarding::onboarding_status(runtime)
            .await
            .map(|data| render::onboarding_data(&data)),
        ConsoleCommand::Dashboard => Ok(render::dashboard(&dashboard::view(runtime).await)),
        ConsoleCommand::Catalog => Ok(render::catalog()),
    };

    let screen = navigation::settle(runtime).await;
    let mut lines = Vec::new();
    match body {
        Ok(text) if !text.is_empty() => lines.push(text),
        Ok(_) => {}
        Err(message) => lines.push(format!("error: {message}")),
    }
    if screen.route() != before || lines.is_empty() {
        lines.push(render::screen(screen));
    }
    LineOutcome::print(lines.join("\n"))
}

/// Read lines from stdin until `quit` or end of input.
pub async fn run_repl(runtime: &AppRuntime) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let banner = format!(
        "Bossika Na Credit console ({})\nType 'help' for commands.\n{}\n",
        runtime.config().api_base_url,
        render::screen(navigation::settle(runtime).await)
    );
    stdout.write_all(banner.as_bytes()).await?;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed");
            break;
        };
        let outcome = execute_line(runtime, &line).await;
        if !outcome.output.is_empty() {
            stdout.write_all(outcome.output.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        if outcome.quit {
            break;
        }
    }

    runtime.unmount_dashboard().await;
    info!("console closed");
    Ok(())
}
