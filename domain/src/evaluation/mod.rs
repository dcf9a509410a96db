//! Evaluation against ground truth

pub mod report;
