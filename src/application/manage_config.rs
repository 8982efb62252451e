//! Config management use case

use crate::error::{PromptagError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for managing promptag configuration
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_or_default(&self.path)?;

        match key {
            "weight_step" => Ok(config.weight_step.to_string()),
            "newline_glyph" => Ok(config.newline_glyph),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value, creating the config file if needed
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_or_default(&self.path)?;

        match key {
            "weight_step" => {
                config.weight_step = value.parse().map_err(|_| {
                    PromptagError::Config(format!("Invalid weight_step: {}", value))
                })?;
            }
            "newline_glyph" => {
                config.newline_glyph = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_file(&self.path)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_or_default(&self.path)
    }
}

fn unknown_key(key: &str) -> PromptagError {
    PromptagError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: weight_step, newline_glyph",
        key
    ))
}
