//! Configuration management

use crate::domain::tags::weight::DEFAULT_STEP;
use crate::domain::tags::NEWLINE_GLYPH;
use crate::error::{PromptagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "PROMPTAG_CONFIG";

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "promptag.toml";

/// Largest accepted weight step (a full sweep of the weight range)
const MAX_WEIGHT_STEP: f64 = 20.0;

/// Check that `step` is usable as a weight increment: finite, above zero
/// and no larger than a full sweep of the weight range
pub fn validate_weight_step(step: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 || step > MAX_WEIGHT_STEP {
        return Err(PromptagError::Config(format!(
            "Invalid weight_step: {}",
            step
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Amount added or removed by one weight increment
    pub weight_step: f64,
    /// Glyph shown in place of line breaks when listing tags
    pub newline_glyph: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            weight_step: DEFAULT_STEP,
            newline_glyph: NEWLINE_GLYPH.to_string(),
        }
    }
}

impl Config {
    /// Resolve the config file path for a working directory.
    /// `PROMPTAG_CONFIG` wins over `promptag.toml` in `dir`.
    pub fn path_for(dir: &Path) -> PathBuf {
        Self::resolve_path(dir, std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    fn resolve_path(dir: &Path, env_override: Option<PathBuf>) -> PathBuf {
        env_override.unwrap_or_else(|| dir.join(CONFIG_FILE_NAME))
    }

    /// Load config for a working directory, falling back to defaults when no
    /// config file exists. An explicit `PROMPTAG_CONFIG` must exist.
    pub fn load(dir: &Path) -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.is_file() {
                    return Err(PromptagError::Config(format!(
                        "{} is set to '{}' but the file does not exist",
                        CONFIG_ENV,
                        path.display()
                    )));
                }
                Self::load_from_file(&path)
            }
            None => Self::load_or_default(&dir.join(CONFIG_FILE_NAME)),
        }
    }

    /// Load config from `path`, or defaults if the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Load and validate config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            PromptagError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save config to a TOML file, creating parent directories as needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_weight_step(self.weight_step)?;

        if self.newline_glyph.is_empty() {
            return Err(PromptagError::Config(
                "newline_glyph cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
