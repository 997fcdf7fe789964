// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BatchError;

pub mod photos;
pub mod videos;

pub use photos::PhotoConfig;
pub use videos::VideoConfig;

/// Top-level configuration file.
///
/// Both sections are optional; an empty file yields the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub photos: PhotoConfig,
    #[serde(default)]
    pub videos: VideoConfig,
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, String> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| e.to_string())?;

        // All referenced variables must exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                )
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        // An empty document parses as null
        if substituted.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&substituted).map_err(|e| e.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.photos.validate()?;
        self.videos.validate()?;
        Ok(())
    }

    /// Load and validate `path`, or return the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, BatchError> {
        let config = match path {
            Some(path) => {
                let config = Self::from_file(path).map_err(BatchError::Config)?;
                tracing::info!(config_file = %path.display(), "Configuration loaded");
                config
            }
            None => Self::default(),
        };

        config.validate().map_err(BatchError::Config)?;
        Ok(config)
    }
}
