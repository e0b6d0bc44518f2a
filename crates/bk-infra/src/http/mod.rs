//! REST client for the Bossika backend.
//!
//! One [`HttpApiClient`] implements all three API ports; the per-port impls
//! live in the sibling modules.

mod auth_api;
mod client;
mod dashboard_api;
mod onboarding_api;

pub use client::{endpoints, HttpApiClient};
