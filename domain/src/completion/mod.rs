//! Completion value objects exchanged with the completion service.

pub mod request;
pub mod result;
