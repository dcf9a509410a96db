//! Answer Question use case
//!
//! The query entrypoint: Classifier → Dispatcher → Stage Pipeline.
//!
//! Every failure along the way degrades to a well-formed string, so
//! [`AnswerQuestionUseCase::answer`] has no error type. The use case holds
//! no mutable state; independent questions can be answered concurrently
//! from a shared instance.

use crate::config::PipelineParams;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::classify_domain::ClassifyDomainUseCase;
use crate::use_cases::run_pipeline::StagePipeline;
use stagewise_domain::util::truncate_str;
use stagewise_domain::{Degradation, Domain, PipelineProfile, Question, ReasoningOutcome};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for answering one question end to end
#[derive(Clone)]
pub struct AnswerQuestionUseCase {
    classifier: ClassifyDomainUseCase,
    pipeline: StagePipeline,
    params: Arc<PipelineParams>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnswerQuestionUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, params: PipelineParams) -> Self {
        let params = Arc::new(params);
        Self {
            classifier: ClassifyDomainUseCase::new(gateway.clone(), params.clone()),
            pipeline: StagePipeline::new(gateway, params.clone()),
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger shared by every stage.
    pub fn with_conversation_logger(self, logger: Arc<dyn ConversationLogger>) -> Self {
        Self {
            classifier: self.classifier.with_conversation_logger(logger.clone()),
            pipeline: self.pipeline.with_conversation_logger(logger.clone()),
            params: self.params,
            conversation_logger: logger,
        }
    }

    /// The classifier used by this use case, for classification-only runs.
    pub fn classifier(&self) -> &ClassifyDomainUseCase {
        &self.classifier
    }

    /// Answer a question. Always returns a string.
    pub async fn answer(&self, question: &str) -> String {
        self.answer_with_progress(question, 0, &NoProgress)
            .await
            .into_answer()
    }

    /// Answer a question, reporting progress and returning the full outcome.
    pub async fn answer_with_progress(
        &self,
        question: &str,
        index: usize,
        progress: &dyn ProgressNotifier,
    ) -> ReasoningOutcome {
        progress.on_question_start(index, question);
        info!("Answering question #{}: {}", index, truncate_str(question, 100));

        let outcome = match Question::try_new(question) {
            Ok(question) => {
                let domain = self.classifier.classify(question.content()).await;
                progress.on_domain_classified(index, domain);
                self.dispatch(question.content(), domain, index, progress)
                    .await
            }
            Err(e) => {
                warn!("Question #{} skipped: {}", index, e);
                ReasoningOutcome::new(self.params.placeholder_answer.clone(), Domain::Error)
                    .with_degradations(vec![Degradation::EmptyQuestion])
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            "answer",
            serde_json::json!({
                "index": index,
                "domain": outcome.domain().as_str(),
                "complete": outcome.is_complete(),
                "answer": outcome.answer(),
            }),
        ));
        progress.on_question_complete(index, &outcome);
        outcome
    }

    /// Run the pipeline registered for `domain`.
    ///
    /// Domains without a profile (the unclassified sentinel) get the
    /// placeholder answer and no completion calls.
    pub async fn dispatch(
        &self,
        question: &str,
        domain: Domain,
        index: usize,
        progress: &dyn ProgressNotifier,
    ) -> ReasoningOutcome {
        match PipelineProfile::for_domain(domain) {
            Some(profile) => {
                self.pipeline
                    .run_with_progress(question, profile, index, progress)
                    .await
            }
            None => {
                warn!("No pipeline for domain {}, returning placeholder", domain);
                ReasoningOutcome::new(self.params.placeholder_answer.clone(), domain)
                    .with_degradations(vec![Degradation::Unroutable { domain }])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingLogger, ScriptedGateway};
    use stagewise_domain::{CompletionResult, Stage};
    use std::sync::Mutex;

    fn use_case(gateway: Arc<ScriptedGateway>) -> AnswerQuestionUseCase {
        AnswerQuestionUseCase::new(gateway, PipelineParams::default())
    }

    #[tokio::test]
    async fn test_end_to_end_math_question() {
        let gateway = Arc::new(ScriptedGateway::texts(&[
            "math",
            "Add the numbers.",
            "2+2 equals 4.",
            "4",
        ]));
        let answer = use_case(gateway.clone()).answer("What is 2+2?").await;

        assert_eq!(answer, "4");
        assert_eq!(gateway.call_count(), 4);
        let requests = gateway.requests();
        assert!(requests[2].system_prompt().contains("expert mathematician"));
    }

    #[tokio::test]
    async fn test_unparseable_classification_routes_to_common_sense() {
        let gateway = Arc::new(ScriptedGateway::texts(&["banana", "plan", "reasoning", "yes"]));
        let outcome = use_case(gateway.clone())
            .answer_with_progress("Is water wet?", 0, &NoProgress)
            .await;

        assert_eq!(outcome.domain(), Domain::CommonSense);
        assert_eq!(outcome.answer(), "yes");
        assert!(gateway.requests()[2]
            .system_prompt()
            .contains("all-knowing entity"));
    }

    #[tokio::test]
    async fn test_total_outage_still_returns_string() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let answer = use_case(gateway.clone()).answer("What is 2+2?").await;

        assert_eq!(answer, "ans");
        // classify + plan + reason; extract is never reached
        assert_eq!(gateway.call_count(), 3);
    }

    #[tokio::test]
    async fn test_blank_question_makes_no_calls() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let outcome = use_case(gateway.clone())
            .answer_with_progress("   ", 0, &NoProgress)
            .await;

        assert_eq!(outcome.answer(), "ans");
        assert_eq!(outcome.degradations(), &[Degradation::EmptyQuestion]);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_error_domain_skips_pipeline() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let outcome = use_case(gateway.clone())
            .dispatch("What is 2+2?", Domain::Error, 0, &NoProgress)
            .await;

        assert_eq!(outcome.answer(), "ans");
        assert_eq!(gateway.call_count(), 0);
        assert!(!outcome.is_complete());
    }

    #[tokio::test]
    async fn test_dispatch_selects_domain_persona() {
        for (domain, role) in [
            (Domain::Math, "expert mathematician"),
            (Domain::Coding, "expert programmer"),
            (Domain::FuturePrediction, "intelligent predictor"),
            (Domain::CommonSense, "all-knowing entity"),
            (Domain::Planning, "all-knowing entity"),
        ] {
            let gateway = Arc::new(ScriptedGateway::texts(&["p", "r", "a"]));
            use_case(gateway.clone())
                .dispatch("q", domain, 0, &NoProgress)
                .await;
            assert!(
                gateway.requests()[1].system_prompt().contains(role),
                "{domain} should use '{role}'"
            );
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_question_start(&self, index: usize, _question: &str) {
            self.events.lock().unwrap().push(format!("start {index}"));
        }

        fn on_domain_classified(&self, _index: usize, domain: Domain) {
            self.events.lock().unwrap().push(format!("domain {domain}"));
        }

        fn on_stage_complete(&self, _index: usize, stage: Stage, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{} {}", stage.as_str(), success));
        }

        fn on_question_complete(&self, index: usize, outcome: &ReasoningOutcome) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {index} {}", outcome.answer()));
        }
    }

    #[tokio::test]
    async fn test_progress_events_in_order() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            CompletionResult::success("coding"),
            CompletionResult::success("plan"),
            CompletionResult::transport_failure("reset"),
        ]));
        let progress = RecordingProgress::default();
        use_case(gateway)
            .answer_with_progress("Write fizzbuzz", 3, &progress)
            .await;

        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "start 3",
                "domain coding",
                "plan true",
                "reason false",
                "done 3 ans",
            ]
        );
    }

    #[tokio::test]
    async fn test_answer_event_logged() {
        let gateway = Arc::new(ScriptedGateway::texts(&["math", "p", "r", "4"]));
        let logger = Arc::new(RecordingLogger::default());
        use_case(gateway)
            .with_conversation_logger(logger.clone())
            .answer("What is 2+2?")
            .await;

        let types = logger.event_types();
        assert_eq!(types.last(), Some(&"answer"));
        assert!(types.contains(&"classification"));
    }
}
