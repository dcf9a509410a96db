//! Infrastructure layer for stagewise
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP completion gateway, configuration
//! file loading, the JSONL conversation log and JSON question/answer files.

pub mod completion;
pub mod config;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use completion::{CompletionError, CompletionSettings, OpenAiCompletionGateway};
pub use config::{
    ConfigLoader, ConfigValidationError, FileBatchConfig, FileCompletionConfig, FileConfig,
    FileLoggingConfig, FilePipelineConfig,
};
pub use logging::JsonlConversationLogger;
pub use storage::{JsonAnswerFile, JsonQuestionFile};
