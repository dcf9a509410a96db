//! Application-level configuration.
//!
//! - [`PipelineParams`]: temperatures, timeout, and placeholders for the
//!   classifier and the stage pipeline

pub mod pipeline_params;

pub use pipeline_params::PipelineParams;
