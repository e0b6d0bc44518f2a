use thiserror::Error;

/// Failure of a call to the REST backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// `message` field of the JSON error body, when present.
        message: Option<String>,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Reduce the error to the string shown inline to the user.
    pub fn display_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token store access denied: {0}")]
    PermissionDenied(String),

    #[error("token store data corrupt: {0}")]
    Corrupt(String),

    #[error("token store failed: {0}")]
    Io(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("platform data directory is not available")]
    DataLocalDirUnavailable,

    #[error("failed to prepare app directory: {0}")]
    Io(String),
}
