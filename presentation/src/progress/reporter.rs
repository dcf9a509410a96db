//! Progress reporting while questions are answered

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use stagewise_application::ports::progress::ProgressNotifier;
use stagewise_domain::util::preview;
use stagewise_domain::{Domain, ReasoningOutcome, Stage};
use std::sync::Mutex;

/// Reports batch progress with a single progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    degraded: Mutex<usize>,
    /// Classification-only runs never complete a question
    advance_on_classified: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            degraded: Mutex::new(0),
            advance_on_classified: false,
        }
    }

    /// Reporter for classification-only runs
    pub fn for_classification() -> Self {
        Self {
            advance_on_classified: true,
            ..Self::new()
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::batch_style());
        pb.set_prefix("Answering");
        pb.set_message("Starting...");
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_question_start(&self, _index: usize, _question: &str) {}

    fn on_domain_classified(&self, index: usize, domain: Domain) {
        if self.advance_on_classified {
            self.with_bar(|pb| {
                pb.set_message(format!("#{} {}", index + 1, domain));
                pb.inc(1);
            });
        }
    }

    fn on_question_complete(&self, index: usize, outcome: &ReasoningOutcome) {
        if !outcome.is_complete()
            && let Ok(mut degraded) = self.degraded.lock()
        {
            *degraded += 1;
        }
        self.with_bar(|pb| {
            let mark = if outcome.is_complete() {
                "v".green()
            } else {
                "x".red()
            };
            pb.set_message(format!("{} #{} {}", mark, index + 1, outcome.domain()));
            pb.inc(1);
        });
    }

    fn on_batch_complete(&self) {
        let degraded = self.degraded.lock().map(|d| *d).unwrap_or(0);
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            let summary = if degraded == 0 {
                "All questions answered".green().to_string()
            } else {
                format!("{} answered with fallbacks", degraded)
                    .yellow()
                    .to_string()
            };
            pb.finish_with_message(summary);
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_question_start(&self, _index: usize, question: &str) {
        eprintln!("{} {}", "->".cyan(), preview(question, 80).bold());
    }

    fn on_domain_classified(&self, _index: usize, domain: Domain) {
        eprintln!("  {} {}", "domain:".dimmed(), domain.display_name());
    }

    fn on_stage_complete(&self, _index: usize, stage: Stage, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), stage.display_name());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), stage.display_name());
        }
    }

    fn on_question_complete(&self, _index: usize, _outcome: &ReasoningOutcome) {}
}
