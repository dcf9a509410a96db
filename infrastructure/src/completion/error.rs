//! Error types for the completion adapter.
//!
//! These never leave the adapter: [`CompletionGateway::complete`] folds
//! every variant into a [`CompletionResult::Failure`].
//!
//! [`CompletionGateway::complete`]: stagewise_application::CompletionGateway::complete

use stagewise_domain::CompletionResult;
use thiserror::Error;

/// Completion adapter errors.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Client could not be built (invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failed before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the request timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-success HTTP status
    #[error("API error ({status}): {diagnostic}")]
    Api { status: u16, diagnostic: String },

    /// Success status but the body was not a chat completion
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<CompletionError> for CompletionResult {
    fn from(error: CompletionError) -> Self {
        match error {
            CompletionError::Api { status, diagnostic } => {
                CompletionResult::service_failure(status, diagnostic)
            }
            other => CompletionResult::transport_failure(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status() {
        let result: CompletionResult = CompletionError::Api {
            status: 429,
            diagnostic: "rate limited".to_string(),
        }
        .into();
        assert_eq!(result.status_code(), 429);
        assert_eq!(result.diagnostic(), Some("rate limited"));
    }

    #[test]
    fn test_timeout_is_transport_failure() {
        let result: CompletionResult = CompletionError::Timeout("60s".to_string()).into();
        assert_eq!(result.status_code(), -1);
        assert!(result.diagnostic().unwrap().contains("timed out"));
    }
}
