//! Pipeline parameters: sampling and fallback policy for each stage.
//!
//! [`PipelineParams`] groups the static values the classifier and the stage
//! pipeline read on every call. They are process-wide and read-only once
//! built; nothing in the use cases mutates them.

use serde::{Deserialize, Serialize};
use stagewise_domain::Stage;
use std::time::Duration;

/// Stage sampling and fallback parameters.
///
/// | Stage    | Default temperature | On failure                 |
/// |----------|---------------------|----------------------------|
/// | Classify | 0.7                 | fall back to common_sense  |
/// | Plan     | 0.7                 | `placeholder_plan`         |
/// | Reason   | 0.7                 | `placeholder_answer`, stop |
/// | Extract  | 0.0                 | `placeholder_answer`       |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    pub classify_temperature: f32,
    pub plan_temperature: f32,
    pub reason_temperature: f32,
    pub extract_temperature: f32,
    /// Timeout applied to every completion call.
    pub timeout: Duration,
    /// Answer returned whenever no real answer could be produced.
    pub placeholder_answer: String,
    /// Plan handed to the Reason stage when planning fails.
    pub placeholder_plan: String,
    /// Date from which questions count as future predictions.
    pub reference_date: String,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            classify_temperature: 0.7,
            plan_temperature: 0.7,
            reason_temperature: 0.7,
            extract_temperature: 0.0,
            timeout: Duration::from_secs(60),
            placeholder_answer: "ans".to_string(),
            placeholder_plan: "No plan is available. Work through the question step by step."
                .to_string(),
            reference_date: "2025-01-01".to_string(),
        }
    }
}

impl PipelineParams {
    /// Sampling temperature used for a stage.
    pub fn temperature_for(&self, stage: Stage) -> f32 {
        match stage {
            Stage::Classify => self.classify_temperature,
            Stage::Plan => self.plan_temperature,
            Stage::Reason => self.reason_temperature,
            Stage::Extract => self.extract_temperature,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_placeholder_answer(mut self, answer: impl Into<String>) -> Self {
        self.placeholder_answer = answer.into();
        self
    }

    pub fn with_placeholder_plan(mut self, plan: impl Into<String>) -> Self {
        self.placeholder_plan = plan.into();
        self
    }

    pub fn with_reference_date(mut self, date: impl Into<String>) -> Self {
        self.reference_date = date.into();
        self
    }

    pub fn with_temperature(mut self, stage: Stage, temperature: f32) -> Self {
        match stage {
            Stage::Classify => self.classify_temperature = temperature,
            Stage::Plan => self.plan_temperature = temperature,
            Stage::Reason => self.reason_temperature = temperature,
            Stage::Extract => self.extract_temperature = temperature,
        }
        self
    }
}
