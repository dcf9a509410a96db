//! Stage pipeline domain types.
//!
//! - [`stage::Stage`]: classify / plan / reason / extract
//! - [`outcome::ReasoningOutcome`]: final answer plus any fallbacks taken

pub mod outcome;
pub mod stage;
