//! Top-level reelpick configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DataConfig, EncoderConfig, RecommendConfig};
use crate::constants::{GENRE_ORDERS, PROJECT_CONFIG_FILE, RUNTIME_BIN_NAMES};
use crate::errors::ConfigError;
use crate::records::TextEncoding;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`REELPICK_*`)
/// 3. Project config (`reelpick.toml` in project root)
/// 4. User config (`~/.reelpick/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReelpickConfig {
    pub data: DataConfig,
    pub encoder: EncoderConfig,
    pub recommend: RecommendConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub movie_file: Option<String>,
    pub decision_table: Option<String>,
    pub missing_runtime_bin: Option<String>,
    pub max_results: Option<usize>,
}

impl ReelpickConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // User config (lowest file priority). A broken user file is fatal
        // only when it fails to parse.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ReelpickConfig) -> Result<(), ConfigError> {
        if let Some(ref bin) = config.encoder.missing_runtime_bin {
            if !RUNTIME_BIN_NAMES.contains(&bin.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "encoder.missing_runtime_bin".to_string(),
                    message: format!("must be one of {}", RUNTIME_BIN_NAMES.join(", ")),
                });
            }
        }
        if let Some(ref order) = config.encoder.genre_order {
            if !GENRE_ORDERS.contains(&order.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "encoder.genre_order".to_string(),
                    message: format!("must be one of {}", GENRE_ORDERS.join(", ")),
                });
            }
        }
        if let Some(ref encoding) = config.data.encoding {
            if let Err(message) = encoding.parse::<TextEncoding>() {
                return Err(ConfigError::InvalidValue {
                    field: "data.encoding".to_string(),
                    message,
                });
            }
        }
        if config.recommend.max_results == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "recommend.max_results".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.reelpick/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".reelpick").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ReelpickConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ReelpickConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ReelpickConfig, other: &ReelpickConfig) {
        if other.data.movie_file.is_some() {
            base.data.movie_file = other.data.movie_file.clone();
        }
        if other.data.decision_table.is_some() {
            base.data.decision_table = other.data.decision_table.clone();
        }
        if other.data.encoding.is_some() {
            base.data.encoding = other.data.encoding.clone();
        }

        if other.encoder.missing_runtime_bin.is_some() {
            base.encoder.missing_runtime_bin = other.encoder.missing_runtime_bin.clone();
        }
        if other.encoder.genre_order.is_some() {
            base.encoder.genre_order = other.encoder.genre_order.clone();
        }

        if other.recommend.max_results.is_some() {
            base.recommend.max_results = other.recommend.max_results;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `REELPICK_DATA_MOVIE_FILE`, `REELPICK_RECOMMEND_MAX_RESULTS`, etc.
    fn apply_env_overrides(config: &mut ReelpickConfig) {
        if let Ok(val) = std::env::var("REELPICK_DATA_MOVIE_FILE") {
            config.data.movie_file = Some(val);
        }
        if let Ok(val) = std::env::var("REELPICK_DATA_DECISION_TABLE") {
            config.data.decision_table = Some(val);
        }
        if let Ok(val) = std::env::var("REELPICK_DATA_ENCODING") {
            config.data.encoding = Some(val);
        }
        if let Ok(val) = std::env::var("REELPICK_ENCODER_MISSING_RUNTIME_BIN") {
            config.encoder.missing_runtime_bin = Some(val);
        }
        if let Ok(val) = std::env::var("REELPICK_ENCODER_GENRE_ORDER") {
            config.encoder.genre_order = Some(val);
        }
        if let Ok(val) = std::env::var("REELPICK_RECOMMEND_MAX_RESULTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.recommend.max_results = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ReelpickConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.movie_file {
            config.data.movie_file = Some(v.clone());
        }
        if let Some(ref v) = cli.decision_table {
            config.data.decision_table = Some(v.clone());
        }
        if let Some(ref v) = cli.missing_runtime_bin {
            config.encoder.missing_runtime_bin = Some(v.clone());
        }
        if let Some(v) = cli.max_results {
            config.recommend.max_results = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
