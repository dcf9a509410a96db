//! File-backed question sources and answer sinks

mod json_file;

pub use json_file::{JsonAnswerFile, JsonQuestionFile};
