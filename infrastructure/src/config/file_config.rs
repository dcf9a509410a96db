//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Connection settings sit at the top level so the `API_KEY`, `API_BASE`
//! and `MODEL_NAME` environment variables map onto them directly.

use crate::completion::CompletionSettings;
use serde::{Deserialize, Serialize};
use stagewise_application::PipelineParams;
use stagewise_domain::Model;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("batch concurrency cannot be 0")]
    InvalidConcurrency,

    #[error("{field} must be within [0, 1], got {value}")]
    TemperatureOutOfRange { field: &'static str, value: f32 },
}

/// Raw completion configuration from TOML (`[completion]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// Upper bound on tokens generated per call
    pub max_tokens: u32,
    /// Timeout in seconds for each API call
    pub timeout_seconds: u64,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            max_tokens: 128,
            timeout_seconds: 60,
        }
    }
}

/// Raw pipeline configuration from TOML (`[pipeline]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    pub classify_temperature: f32,
    pub plan_temperature: f32,
    pub reason_temperature: f32,
    pub extract_temperature: f32,
    pub placeholder_answer: String,
    pub placeholder_plan: String,
    /// Questions about events after this date are future predictions
    pub reference_date: String,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        let params = PipelineParams::default();
        Self {
            classify_temperature: params.classify_temperature,
            plan_temperature: params.plan_temperature,
            reason_temperature: params.reason_temperature,
            extract_temperature: params.extract_temperature,
            placeholder_answer: params.placeholder_answer,
            placeholder_plan: params.placeholder_plan,
            reference_date: params.reference_date,
        }
    }
}

/// Raw batch configuration from TOML (`[batch]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Questions answered in parallel
    pub concurrency: usize,
    /// Where the answers list is written
    pub output_path: PathBuf,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            output_path: PathBuf::from("answers.json"),
        }
    }
}

/// Raw logging configuration from TOML (`[logging]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of every completion exchange
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily rolling operation logs
    pub log_dir: Option<PathBuf>,
}

/// Complete file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model_name: String,
    pub completion: FileCompletionConfig,
    pub pipeline: FilePipelineConfig,
    pub batch: FileBatchConfig,
    pub logging: FileLoggingConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            model_name: Model::DEFAULT.to_string(),
            completion: FileCompletionConfig::default(),
            pipeline: FilePipelineConfig::default(),
            batch: FileBatchConfig::default(),
            logging: FileLoggingConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.completion.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.model_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.batch.concurrency == 0 {
            return Err(ConfigValidationError::InvalidConcurrency);
        }

        let temperatures = [
            ("classify_temperature", self.pipeline.classify_temperature),
            ("plan_temperature", self.pipeline.plan_temperature),
            ("reason_temperature", self.pipeline.reason_temperature),
            ("extract_temperature", self.pipeline.extract_temperature),
        ];
        for (field, value) in temperatures {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::TemperatureOutOfRange { field, value });
            }
        }

        Ok(())
    }

    /// Connection settings for the completion gateway
    pub fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings {
            api_key: self.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: self.api_base.clone(),
            model: Model::new(self.model_name.trim()),
            max_tokens: self.completion.max_tokens,
        }
    }

    /// Stage parameters for the classifier and pipeline
    pub fn pipeline_params(&self) -> PipelineParams {
        let p = &self.pipeline;
        PipelineParams {
            classify_temperature: p.classify_temperature,
            plan_temperature: p.plan_temperature,
            reason_temperature: p.reason_temperature,
            extract_temperature: p.extract_temperature,
            timeout: Duration::from_secs(self.completion.timeout_seconds),
            placeholder_answer: p.placeholder_answer.clone(),
            placeholder_plan: p.placeholder_plan.clone(),
            reference_date: p.reference_date.clone(),
        }
    }
}
