//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for stagewise
#[derive(Parser, Debug)]
#[command(name = "stagewise")]
#[command(author, version, about = "Domain-routed plan, reason, extract question answering")]
#[command(long_about = r#"
Stagewise answers questions with a three-stage reasoning pipeline.

Each question is first classified into a domain (math, coding, science,
common sense, ...). The domain selects the expert persona for:
1. Plan:    a project-manager persona drafts a step-by-step plan
2. Reason:  the domain expert follows the plan and justifies each step
3. Extract: the expert states only the final answer

Configuration files are loaded from (in priority order):
1. API_KEY / API_BASE / MODEL_NAME and STAGEWISE_* environment variables
2. --config <path>         Explicit config file
3. ./stagewise.toml        Project-level config
4. ~/.config/stagewise/config.toml   Global config

Example:
  stagewise "How many prime numbers are there below 30?"
  stagewise --input questions.json --output answers.json
  stagewise --input labelled.json --classify
"#)]
pub struct Cli {
    /// A single question to answer (omit when using --input)
    pub question: Option<String>,

    /// JSON file with a list of {"input": ...} questions (batch mode)
    #[arg(short, long, value_name = "PATH", conflicts_with = "question")]
    pub input: Option<PathBuf>,

    /// Where to write the answers list (batch mode)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Score answers against each question's "output" field
    #[arg(long, requires = "input")]
    pub eval: bool,

    /// Only classify, scoring predictions against each question's "domain" field
    #[arg(long, requires = "input", conflicts_with = "eval")]
    pub classify: bool,

    /// Questions answered in parallel (overrides [batch] concurrency)
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Print the routed domain alongside the answer
    #[arg(long)]
    pub show_domain: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory for daily rolling log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write a JSONL transcript of every completion exchange
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}

impl Cli {
    /// Batch mode reads questions from a file.
    pub fn is_batch(&self) -> bool {
        self.input.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_question() {
        let cli = Cli::try_parse_from(["stagewise", "-vv", "--show-domain", "What is 2+2?"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("What is 2+2?"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.show_domain);
        assert!(!cli.is_batch());
    }

    #[test]
    fn test_batch_flags() {
        let cli = Cli::try_parse_from([
            "stagewise",
            "--input",
            "q.json",
            "-o",
            "a.json",
            "-j",
            "8",
            "--eval",
        ])
        .unwrap();
        assert!(cli.is_batch());
        assert_eq!(cli.output, Some(PathBuf::from("a.json")));
        assert_eq!(cli.concurrency, Some(8));
        assert!(cli.eval);
    }

    #[test]
    fn test_eval_requires_input() {
        assert!(Cli::try_parse_from(["stagewise", "--eval", "q"]).is_err());
        assert!(
            Cli::try_parse_from(["stagewise", "--input", "q.json", "--eval", "--classify"])
                .is_err()
        );
    }
}
