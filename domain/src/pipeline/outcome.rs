//! Result of answering one question

use crate::pipeline::stage::Stage;
use crate::routing::domain::Domain;
use serde::{Deserialize, Serialize};

/// A fallback that was taken while answering a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degradation {
    /// A stage produced no usable text
    StageFailed { stage: Stage, diagnostic: String },
    /// The domain had no pipeline profile; the pipeline was skipped
    Unroutable { domain: Domain },
    /// The question text was blank; nothing was sent to the service
    EmptyQuestion,
}

/// Final answer for one question, with the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningOutcome {
    answer: String,
    domain: Domain,
    degradations: Vec<Degradation>,
}

impl ReasoningOutcome {
    pub fn new(answer: impl Into<String>, domain: Domain) -> Self {
        Self {
            answer: answer.into(),
            domain,
            degradations: Vec::new(),
        }
    }

    pub fn with_degradations(mut self, degradations: Vec<Degradation>) -> Self {
        self.degradations = degradations;
        self
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn into_answer(self) -> String {
        self.answer
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn degradations(&self) -> &[Degradation] {
        &self.degradations
    }

    /// True when the answer came from a completed pipeline rather than a placeholder.
    ///
    /// A planning fallback does not count: the pipeline still runs to the end.
    pub fn is_complete(&self) -> bool {
        !self.degradations.iter().any(|d| match d {
            Degradation::StageFailed { stage, .. } => stage.is_terminal_on_failure(),
            Degradation::Unroutable { .. } | Degradation::EmptyQuestion => true,
        })
    }
}
