//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod classify_domain;
pub mod evaluate;
pub mod run_batch;
pub mod run_pipeline;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
