//! Console commands.
//!
//! Each command wraps one use case, runs inside a `command.*` span and maps
//! failures to the display string shown to the user.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod navigation;
pub mod onboarding;

pub use error::map_err;
