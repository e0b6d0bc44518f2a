use std::path::PathBuf;

use clap::Parser;

use bk_shell::{run_console, ConfigOverrides, StartupOptions};

/// Bossika Na Credit console client.
#[derive(Debug, Parser)]
#[command(name = "bossika", version, about)]
struct Cli {
    /// Configuration file (defaults to config.toml in the data directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend REST base URL, e.g. http://localhost:8000/api
    #[arg(long, value_name = "URL")]
    api_base_url: Option<String>,

    /// Render every page regardless of session state
    #[arg(long)]
    bypass_guard: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    run_console(StartupOptions {
        config_path: cli.config,
        overrides: ConfigOverrides {
            api_base_url: cli.api_base_url,
            bypass_guard: cli.bypass_guard,
        },
    })
    .await
}
