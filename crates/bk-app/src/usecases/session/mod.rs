//! Session store: the single owner of the authenticated identity.

mod store;

pub use store::{AuthError, SessionStore, LOGIN_FAILURE_MESSAGE, REGISTER_FAILURE_MESSAGE};
