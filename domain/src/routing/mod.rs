//! Routing: question domains and the domain → pipeline profile table.
//!
//! - [`domain::Domain`]: closed set of question domains, with an explicit
//!   unclassified sentinel
//! - [`profile::PipelineProfile`]: personas and task framing per domain

pub mod domain;
pub mod profile;
