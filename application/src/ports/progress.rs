//! Progress notification port
//!
//! Defines the interface for reporting progress while questions are answered.

use stagewise_domain::{Domain, ReasoningOutcome, Stage};

/// Callback for progress updates while answering questions
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
/// `index` is the question's position in its batch (0 for single questions).
pub trait ProgressNotifier: Send + Sync {
    /// Called once before a batch starts
    fn on_batch_start(&self, _total: usize) {}

    /// Called when work on a question starts
    fn on_question_start(&self, index: usize, question: &str);

    /// Called after classification, with the domain that will be dispatched
    fn on_domain_classified(&self, _index: usize, _domain: Domain) {}

    /// Called after every completion call
    fn on_stage_complete(&self, _index: usize, _stage: Stage, _success: bool) {}

    /// Called when a question has its final answer
    fn on_question_complete(&self, index: usize, outcome: &ReasoningOutcome);

    /// Called once after the whole batch is answered
    fn on_batch_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_question_start(&self, _index: usize, _question: &str) {}
    fn on_question_complete(&self, _index: usize, _outcome: &ReasoningOutcome) {}
}
