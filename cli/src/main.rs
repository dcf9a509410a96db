//! CLI entrypoint for stagewise
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use stagewise_application::{
    AnswerQuestionUseCase, AnswerSink, ConversationLogger, EvaluateClassificationUseCase,
    NoProgress, ProgressNotifier, QuestionSource, RunBatchUseCase, evaluate_answers,
    validate_answers,
};
use stagewise_domain::AnswerRecord;
use stagewise_infrastructure::{
    ConfigLoader, FileConfig, JsonAnswerFile, JsonQuestionFile, JsonlConversationLogger,
    OpenAiCompletionGateway,
};
use stagewise_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Console logs go to stderr so stdout carries only answers.
/// With a log directory, a daily rolling file is written alongside.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter(verbose));

    let (file, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "stagewise.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter(verbose.max(1)));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    let log_dir = cli.log_dir.clone().or_else(|| config.logging.log_dir.clone());
    let _log_guard = init_tracing(cli.verbose, log_dir.as_deref())?;

    info!("Starting stagewise {}", env!("CARGO_PKG_VERSION"));

    // === Dependency Injection ===
    let settings = config.completion_settings();
    info!("Model: {} via {}", settings.model, settings.endpoint());
    let gateway = Arc::new(OpenAiCompletionGateway::new(settings)?);

    let mut answerer = AnswerQuestionUseCase::new(gateway, config.pipeline_params());

    let conversation_log = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.clone());
    if let Some(path) = conversation_log
        && let Some(logger) = JsonlConversationLogger::new(&path)
    {
        info!("Conversation log: {}", logger.path().display());
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        answerer = answerer.with_conversation_logger(logger);
    }

    match (&cli.input, &cli.question) {
        (Some(input), _) if cli.classify => run_classification(&cli, input, answerer).await,
        (Some(input), _) => run_batch(&cli, &config, input, answerer).await,
        (None, Some(question)) => {
            let progress: &dyn ProgressNotifier = if cli.quiet {
                &NoProgress
            } else {
                &SimpleProgress
            };
            let outcome = answerer.answer_with_progress(question, 0, progress).await;
            print!("{}", ConsoleFormatter::format_answer(&outcome, cli.show_domain));
            Ok(())
        }
        (None, None) => bail!("A question or --input <PATH> is required. See --help."),
    }
}

async fn run_batch(
    cli: &Cli,
    config: &FileConfig,
    input: &Path,
    answerer: AnswerQuestionUseCase,
) -> Result<()> {
    let questions = JsonQuestionFile::new(input).load()?;

    let concurrency = cli.concurrency.unwrap_or(config.batch.concurrency);
    let batch = RunBatchUseCase::new(answerer, concurrency);

    let outcomes = if cli.quiet {
        batch.outcomes(&questions, &NoProgress).await
    } else {
        let progress = ProgressReporter::new();
        batch.outcomes(&questions, &progress).await
    };
    let degraded = outcomes.iter().filter(|o| !o.is_complete()).count();
    let answers: Vec<AnswerRecord> = outcomes
        .into_iter()
        .map(|o| AnswerRecord::new(o.into_answer()))
        .collect();

    let output: PathBuf = cli
        .output
        .clone()
        .unwrap_or_else(|| config.batch.output_path.clone());
    let sink = JsonAnswerFile::new(&output);
    sink.store(&answers)?;

    // Validate what actually landed on disk.
    let written = sink.read_back()?;
    validate_answers(questions.len(), &written)?;

    print!(
        "{}",
        ConsoleFormatter::format_batch_summary(
            written.len(),
            &output.display().to_string(),
            degraded
        )
    );

    if cli.eval {
        let report = evaluate_answers(&questions, &written);
        print!("{}", ConsoleFormatter::format_accuracy(&report));
    }

    Ok(())
}

async fn run_classification(
    cli: &Cli,
    input: &Path,
    answerer: AnswerQuestionUseCase,
) -> Result<()> {
    let questions = JsonQuestionFile::new(input).load()?;
    let use_case = EvaluateClassificationUseCase::new(answerer.classifier().clone());

    let report = if cli.quiet {
        use_case.execute(&questions).await
    } else {
        let progress = ProgressReporter::for_classification();
        use_case.execute_with_progress(&questions, &progress).await
    };

    print!("{}", ConsoleFormatter::format_classification(&report));
    Ok(())
}
