//! Common error types for the fan-out generation client

use thiserror::Error;

/// Application-wide error type for setup, configuration, and validation
/// failures. Per-slot generation failures use [`SlotError`] instead and
/// never surface through this type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Please enter a prompt.")]
    EmptyPrompt,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to initialize image generation: {0}")]
    Setup(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// User-facing classification of a single failed generation attempt.
///
/// This is a closed set: the raw upstream error text is never shown to the
/// user, only one of these fixed messages. Classification is a best-effort
/// heuristic over the upstream failure signal, not a contract the remote
/// service guarantees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("The service did not return an image. The prompt may be too restrictive.")]
    EmptyResult,

    #[error("Request timed out.")]
    Timeout,

    #[error("API key issue.")]
    AuthFailure,

    #[error("Generation failed.")]
    Generic,
}

impl SlotError {
    /// Classify an upstream error message by its diagnostic substrings.
    pub fn from_message(message: &str) -> Self {
        let lowered = message.to_ascii_lowercase();
        if message.contains("deadline") || lowered.contains("timeout") {
            SlotError::Timeout
        } else if message.contains("API key") {
            SlotError::AuthFailure
        } else {
            SlotError::Generic
        }
    }

    /// Classify a transport-level failure from the HTTP client.
    pub fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            SlotError::Timeout
        } else {
            Self::from_message(&error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_deadline_as_timeout() {
        let err = SlotError::from_message("rpc error: deadline exceeded");
        assert_eq!(err, SlotError::Timeout);
    }

    #[test]
    fn test_classify_api_key_as_auth_failure() {
        let err = SlotError::from_message("API key not valid. Please pass a valid API key.");
        assert_eq!(err, SlotError::AuthFailure);
    }

    #[test]
    fn test_classify_unknown_as_generic() {
        let err = SlotError::from_message("something unexpected happened");
        assert_eq!(err, SlotError::Generic);
    }

    #[test]
    fn test_messages_do_not_echo_upstream_text() {
        let err = SlotError::from_message("secret internal detail: deadline");
        assert!(!err.to_string().contains("secret"));
    }
}
