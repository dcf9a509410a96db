//! Application layer for stagewise
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PipelineParams;
pub use ports::{
    completion_gateway::CompletionGateway,
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{NoProgress, ProgressNotifier},
    question_store::{AnswerSink, QuestionSource, StorageError},
};
pub use use_cases::answer_question::AnswerQuestionUseCase;
pub use use_cases::classify_domain::ClassifyDomainUseCase;
pub use use_cases::evaluate::{
    AnswerValidationError, EvaluateClassificationUseCase, MAX_ANSWER_CHARS, evaluate_answers,
    validate_answers,
};
pub use use_cases::run_batch::RunBatchUseCase;
pub use use_cases::run_pipeline::StagePipeline;
