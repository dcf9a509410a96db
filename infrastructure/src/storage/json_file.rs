//! JSON file adapters for question and answer lists
//!
//! Questions: `[{"input": "...", "output": "...", "domain": "..."}, ...]`
//! with `output` and `domain` optional. Answers: `[{"output": "..."}, ...]`
//! in question order.

use serde::Serialize;
use serde::de::DeserializeOwned;
use stagewise_application::{AnswerSink, QuestionSource, StorageError};
use stagewise_domain::{AnswerRecord, QuestionRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

fn io_error(path: &Path, e: impl std::fmt::Display) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    serde_json::from_str(&content).map_err(|e| StorageError::Malformed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    let content = serde_json::to_string_pretty(value).map_err(|e| io_error(path, e))?;
    fs::write(path, content + "\n").map_err(|e| io_error(path, e))
}

/// Question list stored as a JSON array
#[derive(Debug, Clone)]
pub struct JsonQuestionFile {
    path: PathBuf,
}

impl JsonQuestionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonQuestionFile {
    fn load(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        let records: Vec<QuestionRecord> = read_json(&self.path)?;
        info!("Loaded {} questions from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// Answer list written as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonAnswerFile {
    path: PathBuf,
}

impl JsonAnswerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnswerSink for JsonAnswerFile {
    fn store(&self, answers: &[AnswerRecord]) -> Result<(), StorageError> {
        write_json(&self.path, answers)?;
        info!("Wrote {} answers to {}", answers.len(), self.path.display());
        Ok(())
    }

    fn read_back(&self) -> Result<Vec<AnswerRecord>, StorageError> {
        read_json(&self.path)
    }
}
