//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["stagewise.toml", ".stagewise.toml"];

/// Process-wide connection variables read without a prefix
const CONNECTION_ENV_VARS: [&str; 3] = ["API_KEY", "API_BASE", "MODEL_NAME"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `API_KEY`, `API_BASE`, `MODEL_NAME` environment variables
    /// 2. `STAGEWISE_<SECTION>__<KEY>` environment variables
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./stagewise.toml` or `./.stagewise.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/stagewise/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Defaults plus environment only (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Figment::new().merge(Serialized::defaults(FileConfig::default())))
            .extract()
            .map_err(Box::new)
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::prefixed("STAGEWISE_").split("__"))
            .merge(Env::raw().only(&CONNECTION_ENV_VARS))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/stagewise/config.toml if set,
    /// otherwise falls back to ~/.config/stagewise/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("stagewise").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        for var in CONNECTION_ENV_VARS {
            let state = if std::env::var_os(var).is_some() {
                "[SET  ]"
            } else {
                "[     ]"
            };
            println!("  {} Env:     {}", state, var);
        }
        println!("  [     ] Env:     STAGEWISE_<SECTION>__<KEY>");

        if let Some(path) = config_path {
            println!("  [FOUND] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./stagewise.toml or ./.stagewise.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
