//! Startup sequence: config, tracing, wiring, session, console.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, info_span, Instrument};

use bk_core::ports::AppDirsPort;
use bk_infra::DirsAppDirsAdapter;

use super::config::{resolve_config, ConfigOverrides};
use super::runtime::AppRuntime;
use super::tracing::init_tracing_subscriber;
use super::wiring::{resolve_app_dirs, wire_dependencies};
use crate::console;

#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Explicit config file; must exist when given.
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Build the runtime and run the console until the user quits.
pub async fn run_console(options: StartupOptions) -> anyhow::Result<()> {
    let default_config_path = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .ok()
        .map(|dirs| dirs.config_path());
    let config = resolve_config(
        options.config_path.as_deref(),
        default_config_path,
        &options.overrides,
    )?;
    let app_dirs = resolve_app_dirs(&config)?;

    if let Err(e) = init_tracing_subscriber(&app_dirs.logs_dir()) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    info!(
        api_base_url = %config.api_base_url,
        guard_bypass = config.guard_bypass,
        "starting Bossika Na Credit console"
    );

    let deps = wire_dependencies(&config, &app_dirs).context("failed to wire dependencies")?;
    let runtime = AppRuntime::new(deps, config, app_dirs);

    runtime
        .usecases()
        .session()
        .initialize()
        .instrument(info_span!("bootstrap.session.initialize"))
        .await;

    console::run_repl(&runtime).await
}
