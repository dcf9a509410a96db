//! Stages of a question's journey through the orchestrator

use serde::{Deserialize, Serialize};

/// One completion call made while answering a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Domain classification, before dispatch
    Classify,
    /// Produce a step-justified plan
    Plan,
    /// Follow the plan and produce a full reasoning trace
    Reason,
    /// Distill the final answer out of the reasoning trace
    Extract,
}

impl Stage {
    /// The three pipeline stages, in execution order.
    pub const PIPELINE: [Stage; 3] = [Stage::Plan, Stage::Reason, Stage::Extract];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Classify => "classify",
            Stage::Plan => "plan",
            Stage::Reason => "reason",
            Stage::Extract => "extract",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Classify => "Classification",
            Stage::Plan => "Plan",
            Stage::Reason => "Reason",
            Stage::Extract => "Extract",
        }
    }

    /// Whether a failure in this stage ends the pipeline with the placeholder answer.
    pub fn is_terminal_on_failure(&self) -> bool {
        matches!(self, Stage::Reason | Stage::Extract)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
