//! Console output formatter for answers and evaluation reports

use colored::Colorize;
use stagewise_domain::util::preview;
use stagewise_domain::{AccuracyReport, ClassificationReport, Degradation, ReasoningOutcome};

/// Formats answers and reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single answer; the domain line is optional.
    pub fn format_answer(outcome: &ReasoningOutcome, show_domain: bool) -> String {
        let mut output = String::new();

        if show_domain {
            output.push_str(&format!(
                "{} {}\n",
                "Domain:".cyan().bold(),
                outcome.domain().display_name()
            ));
        }
        output.push_str(outcome.answer());
        output.push('\n');

        for degradation in outcome.degradations() {
            output.push_str(&format!(
                "{} {}\n",
                "fallback:".yellow(),
                Self::describe(degradation)
            ));
        }

        output
    }

    /// One-line description of a fallback that was taken.
    pub fn describe(degradation: &Degradation) -> String {
        match degradation {
            Degradation::StageFailed { stage, diagnostic } => {
                format!("{} failed ({})", stage.display_name(), preview(diagnostic, 120))
            }
            Degradation::Unroutable { domain } => {
                format!("no pipeline for domain '{}'", domain.as_str())
            }
            Degradation::EmptyQuestion => "question was empty".to_string(),
        }
    }

    /// Summary printed after a batch is written
    pub fn format_batch_summary(written: usize, path: &str, degraded: usize) -> String {
        let mut output = format!(
            "{} Wrote {} answers to {}\n",
            "v".green(),
            written,
            path.bold()
        );
        if degraded > 0 {
            output.push_str(&format!(
                "  {} {} answered with a fallback\n",
                "!".yellow(),
                degraded
            ));
        }
        output
    }

    /// Answer accuracy against expected outputs
    pub fn format_accuracy(report: &AccuracyReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Answer Accuracy"));
        output.push_str(&format!(
            "  {} {}/{} ({})\n",
            "Correct:".bold(),
            report.correct,
            report.scored,
            Self::percent(report.accuracy())
        ));
        if report.skipped > 0 {
            output.push_str(&format!(
                "  {} {} without an expected output\n",
                "Skipped:".dimmed(),
                report.skipped
            ));
        }

        output
    }

    /// Classifier accuracy, per-domain tallies and every mismatch
    pub fn format_classification(report: &ClassificationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Classification Accuracy"));
        output.push_str(&format!(
            "  {} {}/{} ({})\n",
            "Correct:".bold(),
            report.correct,
            report.scored,
            Self::percent(report.accuracy())
        ));
        if report.skipped > 0 {
            output.push_str(&format!(
                "  {} {} without a recognised label\n",
                "Skipped:".dimmed(),
                report.skipped
            ));
        }

        if !report.per_domain.is_empty() {
            output.push_str(&format!("\n{}\n", "Per domain:".cyan().bold()));
            for (domain, tally) in &report.per_domain {
                output.push_str(&format!(
                    "  {:<18} {}/{}\n",
                    domain, tally.correct, tally.total
                ));
            }
        }

        if !report.mismatches.is_empty() {
            output.push_str(&format!("\n{}\n", "Misclassified:".yellow().bold()));
            for m in &report.mismatches {
                output.push_str(&format!(
                    "  #{} expected {}, got {}: {}\n",
                    m.index,
                    m.expected.as_str().green(),
                    m.predicted.as_str().red(),
                    preview(&m.input, 80)
                ));
            }
        }

        output
    }

    fn percent(ratio: f64) -> String {
        format!("{:.1}%", ratio * 100.0)
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("=== {} ===", title).cyan().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagewise_domain::{Domain, Stage};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_answer_with_domain_and_fallback() {
        plain();
        let outcome = ReasoningOutcome::new("ans", Domain::Math).with_degradations(vec![
            Degradation::StageFailed {
                stage: Stage::Reason,
                diagnostic: "HTTP 500".to_string(),
            },
        ]);
        let text = ConsoleFormatter::format_answer(&outcome, true);
        assert!(text.starts_with("Domain: Math\nans\n"));
        assert!(text.contains("fallback:"));
        assert!(text.contains("HTTP 500"));

        let bare = ConsoleFormatter::format_answer(&ReasoningOutcome::new("4", Domain::Math), false);
        assert_eq!(bare, "4\n");
    }

    #[test]
    fn test_format_accuracy() {
        plain();
        let report = AccuracyReport {
            scored: 4,
            correct: 3,
            skipped: 1,
        };
        let text = ConsoleFormatter::format_accuracy(&report);
        assert!(text.contains("3/4 (75.0%)"));
        assert!(text.contains("1 without an expected output"));
    }

    #[test]
    fn test_format_classification_lists_mismatches() {
        plain();
        let mut report = ClassificationReport::default();
        report.record(0, "What is 2+2?", Domain::Math, Domain::Math);
        report.record(1, "Write a sort", Domain::Coding, Domain::Math);
        let text = ConsoleFormatter::format_classification(&report);
        assert!(text.contains("1/2 (50.0%)"));
        assert!(text.contains("#1 expected coding, got math: Write a sort"));
        assert!(text.contains("coding"));
    }

    #[test]
    fn test_batch_summary() {
        plain();
        let text = ConsoleFormatter::format_batch_summary(3, "answers.json", 0);
        assert!(text.contains("Wrote 3 answers to answers.json"));
        assert!(!text.contains("fallback"));
        let text = ConsoleFormatter::format_batch_summary(3, "answers.json", 2);
        assert!(text.contains("2 answered with a fallback"));
    }
}
