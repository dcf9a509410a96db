//! Model value object representing the completion model name

use serde::{Deserialize, Serialize};

/// Name of the model served by the completion endpoint (Value Object)
///
/// The endpoint is OpenAI-compatible, so any model identifier it accepts
/// is valid here; the name is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    pub const DEFAULT: &'static str = "gpt-4o-mini";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::new(Self::DEFAULT)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::new(s)
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Model(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "gpt-4o-mini");
    }

    #[test]
    fn test_model_serializes_as_plain_string() {
        let json = serde_json::to_string(&Model::from("qwen-2.5")).unwrap();
        assert_eq!(json, "\"qwen-2.5\"");
    }
}
