//! Domain layer for stagewise
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Domain routing
//!
//! Every question is classified into one [`Domain`] and dispatched to the
//! [`PipelineProfile`] registered for it. [`Domain::Error`] is the
//! unclassified sentinel and never reaches a pipeline.
//!
//! ## Stage pipeline
//!
//! - **Plan**: a project-manager persona writes a step-justified plan
//! - **Reason**: the domain expert follows the plan and justifies each step
//! - **Extract**: the expert distills only the final answer
//!
//! ## Completion
//!
//! [`CompletionRequest`] / [`CompletionResult`] are the values exchanged
//! with the external completion service. Failures are values, not errors.

pub mod completion;
pub mod core;
pub mod evaluation;
pub mod pipeline;
pub mod prompt;
pub mod routing;
pub mod util;

// Re-export commonly used types
pub use completion::{
    request::CompletionRequest,
    result::{CompletionResult, TRANSPORT_FAILURE_STATUS},
};
pub use core::{
    error::DomainError,
    model::Model,
    question::{AnswerRecord, Question, QuestionRecord},
};
pub use evaluation::report::{AccuracyReport, ClassificationReport, DomainTally, Misclassification};
pub use pipeline::{
    outcome::{Degradation, ReasoningOutcome},
    stage::Stage,
};
pub use prompt::PromptTemplate;
pub use routing::{domain::Domain, profile::PipelineProfile};
