//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: name of the completion model
//! - [`question::Question`]: a validated question, plus the
//!   [`question::QuestionRecord`] / [`question::AnswerRecord`] list entries
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
