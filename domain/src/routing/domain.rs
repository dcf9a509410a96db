//! Question domain value object

use serde::{Deserialize, Serialize};

/// The subject area a question belongs to (Value Object)
///
/// Every question is routed to exactly one domain before it reaches the
/// stage pipeline. [`Domain::Error`] is the "unclassified" sentinel: it is
/// never a pipeline key and must be resolved before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Math,
    CommonSense,
    Coding,
    FuturePrediction,
    Planning,
    Error,
}

impl Domain {
    /// Domains that own a pipeline profile, in classifier vocabulary order.
    pub const ROUTABLE: [Domain; 5] = [
        Domain::Math,
        Domain::CommonSense,
        Domain::Coding,
        Domain::FuturePrediction,
        Domain::Planning,
    ];

    /// Domain used whenever classification yields nothing usable.
    pub const FALLBACK: Domain = Domain::CommonSense;

    /// Wire label (lowercase snake case)
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Math => "math",
            Domain::CommonSense => "common_sense",
            Domain::Coding => "coding",
            Domain::FuturePrediction => "future_prediction",
            Domain::Planning => "planning",
            Domain::Error => "error",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Math => "Math",
            Domain::CommonSense => "Common Sense",
            Domain::Coding => "Coding",
            Domain::FuturePrediction => "Future Prediction",
            Domain::Planning => "Planning",
            Domain::Error => "Unclassified",
        }
    }

    /// Whether this domain may be dispatched to a pipeline.
    pub fn is_routable(&self) -> bool {
        !matches!(self, Domain::Error)
    }

    /// Parse a label produced by the classifier model.
    ///
    /// Total: the text is trimmed and lowercased, and anything that is not
    /// one of the routable labels (including `"error"` itself) resolves to
    /// [`Domain::FALLBACK`].
    pub fn from_label(text: &str) -> Domain {
        let normalized = text.trim().to_lowercase();
        Domain::ROUTABLE
            .into_iter()
            .find(|domain| domain.as_str() == normalized)
            .unwrap_or(Domain::FALLBACK)
    }

    /// Map the sentinel onto the fallback domain; routable domains pass through.
    pub fn resolve(self) -> Domain {
        if self.is_routable() {
            self
        } else {
            Domain::FALLBACK
        }
    }

    /// Comma separated list of routable labels, for prompts.
    pub fn vocabulary() -> String {
        Domain::ROUTABLE
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = crate::core::error::DomainError;

    /// Strict parse of a ground-truth label (exact lowercase match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "math" => Ok(Domain::Math),
            "common_sense" => Ok(Domain::CommonSense),
            "coding" => Ok(Domain::Coding),
            "future_prediction" => Ok(Domain::FuturePrediction),
            "planning" => Ok(Domain::Planning),
            "error" => Ok(Domain::Error),
            other => Err(crate::core::error::DomainError::UnknownDomain(
                other.to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_exact() {
        assert_eq!(Domain::from_label("math"), Domain::Math);
        assert_eq!(Domain::from_label("future_prediction"), Domain::FuturePrediction);
    }

    #[test]
    fn test_from_label_normalizes_case_and_whitespace() {
        assert_eq!(Domain::from_label("  CODING\n"), Domain::Coding);
        assert_eq!(Domain::from_label("Planning"), Domain::Planning);
    }

    #[test]
    fn test_from_label_falls_back() {
        assert_eq!(Domain::from_label("banana"), Domain::CommonSense);
        assert_eq!(Domain::from_label(""), Domain::CommonSense);
        assert_eq!(Domain::from_label("math."), Domain::CommonSense);
    }

    #[test]
    fn test_from_label_never_yields_error() {
        assert_eq!(Domain::from_label("error"), Domain::CommonSense);
    }

    #[test]
    fn test_resolve_sentinel() {
        assert_eq!(Domain::Error.resolve(), Domain::CommonSense);
        assert_eq!(Domain::Math.resolve(), Domain::Math);
    }

    #[test]
    fn test_from_str_strict() {
        assert_eq!("coding".parse::<Domain>().unwrap(), Domain::Coding);
        assert!("Coding".parse::<Domain>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Domain::CommonSense).unwrap();
        assert_eq!(json, "\"common_sense\"");
        let parsed: Domain = serde_json::from_str("\"future_prediction\"").unwrap();
        assert_eq!(parsed, Domain::FuturePrediction);
    }

    #[test]
    fn test_vocabulary_excludes_error() {
        let vocab = Domain::vocabulary();
        assert!(vocab.contains("common_sense"));
        assert!(!vocab.contains("error"));
    }
}
