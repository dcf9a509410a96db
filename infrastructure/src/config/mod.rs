//! Configuration file loading for stagewise
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `API_KEY` / `API_BASE` / `MODEL_NAME` environment variables
//! 2. `STAGEWISE_<SECTION>__<KEY>` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./stagewise.toml` or `./.stagewise.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/stagewise/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBatchConfig, FileCompletionConfig, FileConfig, FileLoggingConfig,
    FilePipelineConfig,
};
pub use loader::ConfigLoader;
