//! Run Batch use case
//!
//! Answers a list of questions. Questions share nothing mutable, so up to
//! `concurrency` of them are in flight at once; each question's own stages
//! remain strictly sequential. Answers come back in input order.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::answer_question::AnswerQuestionUseCase;
use futures::stream::{self, StreamExt};
use stagewise_domain::{AnswerRecord, QuestionRecord, ReasoningOutcome};
use tracing::info;

/// Use case for answering a batch of questions
pub struct RunBatchUseCase {
    answerer: AnswerQuestionUseCase,
    concurrency: usize,
}

impl RunBatchUseCase {
    /// `concurrency` is clamped to at least 1.
    pub fn new(answerer: AnswerQuestionUseCase, concurrency: usize) -> Self {
        Self {
            answerer,
            concurrency: concurrency.max(1),
        }
    }

    /// Execute the batch with default (no-op) progress
    pub async fn execute(&self, questions: &[QuestionRecord]) -> Vec<AnswerRecord> {
        self.execute_with_progress(questions, &NoProgress).await
    }

    /// Execute the batch with progress callbacks
    pub async fn execute_with_progress(
        &self,
        questions: &[QuestionRecord],
        progress: &dyn ProgressNotifier,
    ) -> Vec<AnswerRecord> {
        self.outcomes(questions, progress)
            .await
            .into_iter()
            .map(|outcome| AnswerRecord::new(outcome.into_answer()))
            .collect()
    }

    /// Answer every question and keep the full outcomes, in input order.
    pub async fn outcomes(
        &self,
        questions: &[QuestionRecord],
        progress: &dyn ProgressNotifier,
    ) -> Vec<ReasoningOutcome> {
        info!(
            "Answering {} questions ({} at a time)",
            questions.len(),
            self.concurrency
        );
        progress.on_batch_start(questions.len());

        let outcomes: Vec<ReasoningOutcome> = stream::iter(questions.iter().enumerate())
            .map(|(index, record)| {
                self.answerer
                    .answer_with_progress(&record.input, index, progress)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let degraded = outcomes.iter().filter(|o| !o.is_complete()).count();
        info!(
            "Batch finished: {} answered, {} placeholder answers",
            outcomes.len() - degraded,
            degraded
        );
        progress.on_batch_complete();
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineParams;
    use crate::use_cases::test_support::{EchoGateway, ScriptedGateway};
    use std::sync::Arc;

    fn records(inputs: &[&str]) -> Vec<QuestionRecord> {
        inputs.iter().map(|i| QuestionRecord::new(*i)).collect()
    }

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let answerer = AnswerQuestionUseCase::new(Arc::new(EchoGateway), PipelineParams::default());
        let batch = RunBatchUseCase::new(answerer, 4);

        let answers = batch.execute(&records(&["q1", "q2", "q3", "q4", "q5"])).await;

        let outputs: Vec<_> = answers.iter().map(|a| a.output.as_str()).collect();
        assert_eq!(
            outputs,
            vec![
                "answer to q1",
                "answer to q2",
                "answer to q3",
                "answer to q4",
                "answer to q5",
            ]
        );
    }

    #[tokio::test]
    async fn test_batch_sequential_scripted() {
        let gateway = Arc::new(ScriptedGateway::texts(&[
            "math", "p", "r", "4", // first question
            "coding", "p", "r", "fn main() {}", // second question
        ]));
        let answerer = AnswerQuestionUseCase::new(gateway.clone(), PipelineParams::default());
        let batch = RunBatchUseCase::new(answerer, 1);

        let answers = batch.execute(&records(&["2+2?", "hello world in rust"])).await;

        assert_eq!(answers, vec![AnswerRecord::new("4"), AnswerRecord::new("fn main() {}")]);
        assert_eq!(gateway.call_count(), 8);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_clamped() {
        let answerer = AnswerQuestionUseCase::new(Arc::new(EchoGateway), PipelineParams::default());
        let batch = RunBatchUseCase::new(answerer, 0);

        let answers = batch.execute(&records(&["only"])).await;
        assert_eq!(answers.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let answerer = AnswerQuestionUseCase::new(Arc::new(EchoGateway), PipelineParams::default());
        let batch = RunBatchUseCase::new(answerer, 2);
        assert!(batch.execute(&[]).await.is_empty());
    }
}
