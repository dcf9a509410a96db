//! Completion request value object

use crate::core::error::DomainError;
use std::time::Duration;

/// A single system + user prompt pair sent to the completion service.
///
/// Constructed fresh for every call and never mutated. Construction
/// enforces the input constraints of the completion contract:
///
/// - `prompt` and `system_prompt` are non-empty
/// - `temperature` is within `[0, 1]`
/// - `timeout` is positive
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use stagewise_domain::completion::request::CompletionRequest;
///
/// let request = CompletionRequest::new(
///     "What is 2+2?",
///     "You are an expert mathematician.",
///     0.0,
///     Duration::from_secs(30),
/// )
/// .unwrap();
/// assert_eq!(request.temperature(), 0.0);
///
/// assert!(CompletionRequest::new("", "persona", 0.5, Duration::from_secs(1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    prompt: String,
    system_prompt: String,
    temperature: f32,
    timeout: Duration,
}

impl CompletionRequest {
    pub fn new(
        prompt: impl Into<String>,
        system_prompt: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        let system_prompt = system_prompt.into();

        if prompt.trim().is_empty() {
            return Err(DomainError::InvalidRequest("prompt is empty".to_string()));
        }
        if system_prompt.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "system prompt is empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&temperature) {
            return Err(DomainError::TemperatureOutOfRange(temperature));
        }
        if timeout.is_zero() {
            return Err(DomainError::InvalidRequest("timeout is zero".to_string()));
        }

        Ok(Self {
            prompt,
            system_prompt,
            temperature,
            timeout,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
