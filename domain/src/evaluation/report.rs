//! Evaluation value objects - accuracy against ground truth

use crate::routing::domain::Domain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exact-match accuracy of answers against expected outputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Questions that carried an expected output
    pub scored: usize,
    /// Questions whose answer matched exactly
    pub correct: usize,
    /// Questions with no expected output
    pub skipped: usize,
}

impl AccuracyReport {
    /// Fraction of scored questions answered correctly (0 when nothing was scored).
    pub fn accuracy(&self) -> f64 {
        if self.scored == 0 {
            0.0
        } else {
            self.correct as f64 / self.scored as f64
        }
    }
}

/// A question whose predicted domain differed from its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misclassification {
    pub index: usize,
    pub input: String,
    pub expected: Domain,
    pub predicted: Domain,
}

/// Per-domain tallies for classification accuracy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTally {
    pub total: usize,
    pub correct: usize,
}

/// Classifier accuracy against labelled questions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub scored: usize,
    pub correct: usize,
    /// Questions with a missing or unrecognised label
    pub skipped: usize,
    pub per_domain: BTreeMap<String, DomainTally>,
    pub mismatches: Vec<Misclassification>,
}

impl ClassificationReport {
    pub fn accuracy(&self) -> f64 {
        if self.scored == 0 {
            0.0
        } else {
            self.correct as f64 / self.scored as f64
        }
    }

    /// Record one labelled prediction.
    pub fn record(&mut self, index: usize, input: &str, expected: Domain, predicted: Domain) {
        self.scored += 1;
        let tally = self
            .per_domain
            .entry(expected.as_str().to_string())
            .or_default();
        tally.total += 1;

        if expected == predicted {
            self.correct += 1;
            tally.correct += 1;
        } else {
            self.mismatches.push(Misclassification {
                index,
                input: input.to_string(),
                expected,
                predicted,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_empty_is_zero() {
        assert_eq!(AccuracyReport::default().accuracy(), 0.0);
        assert_eq!(ClassificationReport::default().accuracy(), 0.0);
    }

    #[test]
    fn test_accuracy_ratio() {
        let report = AccuracyReport {
            scored: 4,
            correct: 3,
            skipped: 1,
        };
        assert!((report.accuracy() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_classification_record() {
        let mut report = ClassificationReport::default();
        report.record(0, "2+2?", Domain::Math, Domain::Math);
        report.record(1, "write a loop", Domain::Coding, Domain::Math);

        assert_eq!(report.scored, 2);
        assert_eq!(report.correct, 1);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].index, 1);
        assert_eq!(report.per_domain["coding"].total, 1);
        assert_eq!(report.per_domain["coding"].correct, 0);
        assert_eq!(report.per_domain["math"].correct, 1);
    }
}
