/// Centralized error mapping for commands.
///
/// Used for plumbing failures that have no user-facing fallback message.
pub fn map_err(err: anyhow::Error) -> String {
    err.to_string()
}
