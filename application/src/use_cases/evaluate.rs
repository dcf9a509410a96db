//! Answer validation and accuracy scoring against ground truth.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::classify_domain::ClassifyDomainUseCase;
use stagewise_domain::{
    AccuracyReport, AnswerRecord, ClassificationReport, QuestionRecord,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Answers must stay strictly below this many characters.
pub const MAX_ANSWER_CHARS: usize = 5000;

/// Reasons an answers list is not acceptable for grading
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnswerValidationError {
    #[error("Mismatched lengths: {questions} questions vs {answers} answers")]
    LengthMismatch { questions: usize, answers: usize },

    #[error(
        "Answer at index {index} exceeds 5000 characters ({chars} chars); \
         it must not include intermediate results"
    )]
    AnswerTooLong { index: usize, chars: usize },
}

/// Check that there is one answer per question and that no answer is too long.
pub fn validate_answers(
    question_count: usize,
    answers: &[AnswerRecord],
) -> Result<(), AnswerValidationError> {
    if question_count != answers.len() {
        return Err(AnswerValidationError::LengthMismatch {
            questions: question_count,
            answers: answers.len(),
        });
    }
    for (index, answer) in answers.iter().enumerate() {
        let chars = answer.output.chars().count();
        if chars >= MAX_ANSWER_CHARS {
            return Err(AnswerValidationError::AnswerTooLong { index, chars });
        }
    }
    Ok(())
}

/// Exact-match accuracy of `answers` against each question's expected output.
///
/// Questions without an expected output are counted as skipped.
pub fn evaluate_answers(questions: &[QuestionRecord], answers: &[AnswerRecord]) -> AccuracyReport {
    let mut report = AccuracyReport::default();
    for (question, answer) in questions.iter().zip(answers) {
        match &question.output {
            Some(expected) => {
                report.scored += 1;
                if *expected == answer.output {
                    report.correct += 1;
                }
            }
            None => report.skipped += 1,
        }
    }
    report
}

/// Use case for measuring classifier accuracy on labelled questions
pub struct EvaluateClassificationUseCase {
    classifier: ClassifyDomainUseCase,
}

impl EvaluateClassificationUseCase {
    pub fn new(classifier: ClassifyDomainUseCase) -> Self {
        Self { classifier }
    }

    pub async fn execute(&self, questions: &[QuestionRecord]) -> ClassificationReport {
        self.execute_with_progress(questions, &NoProgress).await
    }

    /// Classify every labelled question in order and compare with its label.
    ///
    /// Questions with no label, or a label outside the domain vocabulary,
    /// are skipped without calling the service.
    pub async fn execute_with_progress(
        &self,
        questions: &[QuestionRecord],
        progress: &dyn ProgressNotifier,
    ) -> ClassificationReport {
        let mut report = ClassificationReport::default();
        progress.on_batch_start(questions.len());

        for (index, question) in questions.iter().enumerate() {
            let expected = match question.expected_domain() {
                Some(Ok(domain)) => domain,
                Some(Err(e)) => {
                    warn!("Question #{} has an unusable label: {}", index, e);
                    report.skipped += 1;
                    continue;
                }
                None => {
                    report.skipped += 1;
                    continue;
                }
            };

            progress.on_question_start(index, &question.input);
            let predicted = self.classifier.classify(&question.input).await;
            progress.on_domain_classified(index, predicted);
            debug!("#{}: expected {}, predicted {}", index, expected, predicted);
            report.record(index, &question.input, expected, predicted);
        }

        progress.on_batch_complete();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineParams;
    use crate::use_cases::test_support::ScriptedGateway;
    use stagewise_domain::Domain;
    use std::sync::Arc;

    #[test]
    fn test_validate_ok() {
        let answers = vec![AnswerRecord::new("4"), AnswerRecord::new("yes")];
        assert!(validate_answers(2, &answers).is_ok());
    }

    #[test]
    fn test_validate_length_mismatch() {
        let answers = vec![AnswerRecord::new("4")];
        assert_eq!(
            validate_answers(2, &answers),
            Err(AnswerValidationError::LengthMismatch {
                questions: 2,
                answers: 1
            })
        );
    }

    #[test]
    fn test_validate_too_long_counts_characters() {
        let at_limit = "x".repeat(MAX_ANSWER_CHARS);
        let answers = vec![AnswerRecord::new("ok"), AnswerRecord::new(at_limit)];
        assert_eq!(
            validate_answers(2, &answers),
            Err(AnswerValidationError::AnswerTooLong {
                index: 1,
                chars: MAX_ANSWER_CHARS
            })
        );

        // Multi-byte characters count once each
        let below = "é".repeat(MAX_ANSWER_CHARS - 1);
        assert!(validate_answers(1, &[AnswerRecord::new(below)]).is_ok());
    }

    #[test]
    fn test_evaluate_exact_match() {
        let questions = vec![
            QuestionRecord::new("a").with_expected_output("4"),
            QuestionRecord::new("b").with_expected_output("yes"),
            QuestionRecord::new("c"),
        ];
        let answers = vec![
            AnswerRecord::new("4"),
            AnswerRecord::new("Yes"),
            AnswerRecord::new("whatever"),
        ];

        let report = evaluate_answers(&questions, &answers);
        assert_eq!(report.scored, 2);
        assert_eq!(report.correct, 1);
        assert_eq!(report.skipped, 1);
        assert!((report.accuracy() - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_classification_accuracy() {
        let gateway = Arc::new(ScriptedGateway::texts(&["math", "math", "planning"]));
        let classifier = ClassifyDomainUseCase::new(gateway.clone(), Arc::new(PipelineParams::default()));
        let use_case = EvaluateClassificationUseCase::new(classifier);

        let questions = vec![
            QuestionRecord::new("2+2?").with_domain_label("math"),
            QuestionRecord::new("write quicksort").with_domain_label("coding"),
            QuestionRecord::new("unlabelled"),
            QuestionRecord::new("odd label").with_domain_label("astrology"),
            QuestionRecord::new("plan a trip").with_domain_label("planning"),
        ];

        let report = use_case.execute(&questions).await;
        assert_eq!(report.scored, 3);
        assert_eq!(report.correct, 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].index, 1);
        assert_eq!(report.mismatches[0].expected, Domain::Coding);
        assert_eq!(report.mismatches[0].predicted, Domain::Math);
        // Skipped questions never reach the service
        assert_eq!(gateway.call_count(), 3);
    }
}
