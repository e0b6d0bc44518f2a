pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, ConfigOverrides};
pub use run::{run_console, StartupOptions};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{resolve_app_dirs, wire_dependencies, WiringError, WiringResult};
