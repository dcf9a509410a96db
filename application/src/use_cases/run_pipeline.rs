//! Stage pipeline: Plan → Reason → Extract
//!
//! One generic runner serves every domain; the [`PipelineProfile`] supplies
//! the personas and task framing.
//!
//! ```text
//! Plan ──(fail: placeholder plan)──▶ Reason ──(fail: placeholder answer, stop)
//!                                       │
//!                                       ▼
//!                                    Extract ──(fail: placeholder answer)
//! ```
//!
//! Reasoning and extraction are separate calls: the reasoning trace is long
//! and justified, while graders compare exact final-answer strings.
//! Extraction runs at temperature zero and is re-grounded on the original
//! question.

use crate::config::PipelineParams;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::call_stage;
use stagewise_domain::{
    Degradation, PipelineProfile, PromptTemplate, ReasoningOutcome, Stage,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the three-stage pipeline for one question.
#[derive(Clone)]
pub struct StagePipeline {
    gateway: Arc<dyn CompletionGateway>,
    params: Arc<PipelineParams>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl StagePipeline {
    pub fn new(gateway: Arc<dyn CompletionGateway>, params: Arc<PipelineParams>) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run the pipeline with default (no-op) progress.
    pub async fn run(&self, question: &str, profile: &PipelineProfile) -> ReasoningOutcome {
        self.run_with_progress(question, profile, 0, &NoProgress).await
    }

    /// Run the pipeline, reporting each stage to `progress`.
    pub async fn run_with_progress(
        &self,
        question: &str,
        profile: &PipelineProfile,
        index: usize,
        progress: &dyn ProgressNotifier,
    ) -> ReasoningOutcome {
        let mut degradations = Vec::new();

        // Stage 1: Plan
        let plan = match self
            .call(
                Stage::Plan,
                profile.plan_persona,
                &PromptTemplate::plan_prompt(question, profile),
                index,
                progress,
            )
            .await
        {
            Ok(plan) => plan,
            Err(diagnostic) => {
                warn!("Planning failed, continuing with placeholder plan");
                degradations.push(Degradation::StageFailed {
                    stage: Stage::Plan,
                    diagnostic,
                });
                self.params.placeholder_plan.clone()
            }
        };

        // Stage 2: Reason
        let reasoning = match self
            .call(
                Stage::Reason,
                profile.reason_persona,
                &PromptTemplate::reason_prompt(question, &plan, profile),
                index,
                progress,
            )
            .await
        {
            Ok(reasoning) => reasoning,
            Err(diagnostic) => {
                degradations.push(Degradation::StageFailed {
                    stage: Stage::Reason,
                    diagnostic,
                });
                return self.placeholder(profile, degradations);
            }
        };

        // Stage 3: Extract
        match self
            .call(
                Stage::Extract,
                profile.reason_persona,
                &PromptTemplate::extract_prompt(question, &reasoning),
                index,
                progress,
            )
            .await
        {
            Ok(answer) => {
                info!("Pipeline for {} produced an answer", profile.domain);
                ReasoningOutcome::new(answer, profile.domain).with_degradations(degradations)
            }
            Err(diagnostic) => {
                degradations.push(Degradation::StageFailed {
                    stage: Stage::Extract,
                    diagnostic,
                });
                self.placeholder(profile, degradations)
            }
        }
    }

    async fn call(
        &self,
        stage: Stage,
        persona: &str,
        prompt: &str,
        index: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, String> {
        let result = call_stage(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            &self.params,
            stage,
            persona,
            prompt,
        )
        .await;
        progress.on_stage_complete(index, stage, result.is_ok());
        result
    }

    fn placeholder(
        &self,
        profile: &PipelineProfile,
        degradations: Vec<Degradation>,
    ) -> ReasoningOutcome {
        warn!(
            "Pipeline for {} returned the placeholder answer",
            profile.domain
        );
        ReasoningOutcome::new(self.params.placeholder_answer.clone(), profile.domain)
            .with_degradations(degradations)
    }
}
