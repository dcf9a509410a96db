//! Completion result value object

use serde::{Deserialize, Serialize};

/// Status code reported for failures that never reached the service.
pub const TRANSPORT_FAILURE_STATUS: i32 = -1;

/// Outcome of one call to the completion service.
///
/// Every failure mode (transport error, timeout, non-success status,
/// undecodable body) is encoded as [`CompletionResult::Failure`]; the
/// completion client never returns an error past its boundary.
///
/// A `Success` may still carry empty text. Callers go through
/// [`CompletionResult::usable_text`], which treats empty text as failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompletionResult {
    Success {
        /// Content of the first choice's message
        text: String,
        /// Raw response body, kept for transcripts
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw_body: Option<String>,
    },
    Failure {
        /// HTTP status, or `None` when the request never got a response
        status: Option<u16>,
        /// Best-effort description of what went wrong
        diagnostic: String,
    },
}

impl CompletionResult {
    pub fn success(text: impl Into<String>) -> Self {
        CompletionResult::Success {
            text: text.into(),
            raw_body: None,
        }
    }

    pub fn success_with_body(text: impl Into<String>, raw_body: impl Into<String>) -> Self {
        CompletionResult::Success {
            text: text.into(),
            raw_body: Some(raw_body.into()),
        }
    }

    /// A failure reported by the service with an HTTP status.
    pub fn service_failure(status: u16, diagnostic: impl Into<String>) -> Self {
        CompletionResult::Failure {
            status: Some(status),
            diagnostic: diagnostic.into(),
        }
    }

    /// A failure before any response arrived (network error, timeout).
    pub fn transport_failure(diagnostic: impl Into<String>) -> Self {
        CompletionResult::Failure {
            status: None,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompletionResult::Success { .. })
    }

    /// Trimmed response text, or `None` on failure or when the text is blank.
    pub fn usable_text(&self) -> Option<&str> {
        match self {
            CompletionResult::Success { text, .. } => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            CompletionResult::Failure { .. } => None,
        }
    }

    /// Numeric status: the HTTP status, 200 on success, or
    /// [`TRANSPORT_FAILURE_STATUS`] when no response arrived.
    pub fn status_code(&self) -> i32 {
        match self {
            CompletionResult::Success { .. } => 200,
            CompletionResult::Failure {
                status: Some(code), ..
            } => i32::from(*code),
            CompletionResult::Failure { status: None, .. } => TRANSPORT_FAILURE_STATUS,
        }
    }

    /// Failure description, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            CompletionResult::Failure { diagnostic, .. } => Some(diagnostic),
            CompletionResult::Success { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_text_trims() {
        let result = CompletionResult::success("  42\n");
        assert_eq!(result.usable_text(), Some("42"));
    }

    #[test]
    fn test_blank_success_is_not_usable() {
        assert_eq!(CompletionResult::success("").usable_text(), None);
        assert_eq!(CompletionResult::success(" \n\t").usable_text(), None);
        assert!(CompletionResult::success("").is_success());
    }

    #[test]
    fn test_failure_is_not_usable() {
        let result = CompletionResult::service_failure(500, "boom");
        assert_eq!(result.usable_text(), None);
        assert_eq!(result.diagnostic(), Some("boom"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CompletionResult::success("x").status_code(), 200);
        assert_eq!(CompletionResult::service_failure(429, "slow down").status_code(), 429);
        assert_eq!(
            CompletionResult::transport_failure("timed out").status_code(),
            TRANSPORT_FAILURE_STATUS
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(CompletionResult::transport_failure("dns")).unwrap();
        assert_eq!(json["type"], "failure");
        assert!(json["status"].is_null());
    }
}
