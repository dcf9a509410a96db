//! Completion service adapter (OpenAI-compatible chat completions)

pub mod error;
pub mod gateway;
pub mod types;

pub use error::CompletionError;
pub use gateway::{CompletionSettings, OpenAiCompletionGateway};
