//! Security primitives.

pub mod secret;

pub use secret::SecretString;
