//! Bossika Na Credit console shell
//!
//! Bootstrap (configuration, tracing, dependency wiring), the command layer
//! and the interactive console.

pub mod bootstrap;
pub mod commands;
pub mod console;

pub use bootstrap::{run_console, AppRuntime, ConfigOverrides, StartupOptions};
