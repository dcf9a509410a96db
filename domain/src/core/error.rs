//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised only when constructing value objects from invalid input.
/// Completion and pipeline failures are never errors; they degrade to
/// placeholder values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown domain label: {0}")]
    UnknownDomain(String),

    #[error("Invalid completion request: {0}")]
    InvalidRequest(String),

    #[error("Temperature {0} is outside [0, 1]")]
    TemperatureOutOfRange(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::UnknownDomain("banana".to_string());
        assert_eq!(error.to_string(), "Unknown domain label: banana");

        let error = DomainError::TemperatureOutOfRange(1.5);
        assert_eq!(error.to_string(), "Temperature 1.5 is outside [0, 1]");
    }
}
