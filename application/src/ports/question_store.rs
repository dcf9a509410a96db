//! Question source and answer sink ports
//!
//! Persistence of question lists and answer lists is outside the core;
//! these traits are the seam the batch driver reads from and writes to.

use stagewise_domain::{AnswerRecord, QuestionRecord};
use thiserror::Error;

/// Errors raised by question/answer storage adapters
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed data in {path}: {message}")]
    Malformed { path: String, message: String },
}

/// Ordered source of questions
pub trait QuestionSource: Send + Sync {
    fn load(&self) -> Result<Vec<QuestionRecord>, StorageError>;
}

/// Destination for the answers list
pub trait AnswerSink: Send + Sync {
    /// Persist the answers, replacing any previous contents
    fn store(&self, answers: &[AnswerRecord]) -> Result<(), StorageError>;

    /// Read back what was stored, for post-write validation
    fn read_back(&self) -> Result<Vec<AnswerRecord>, StorageError>;
}
