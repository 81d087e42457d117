use super::types::PipelineConfig;
use crate::{EmojiCatalogError, Result};
use std::path::{Path, PathBuf};
use tokio::sync::Semaphore;
use tracing::debug;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "emoji-catalog.yaml";

/// Loads and validates pipeline configuration
pub struct ConfigLoader {
    /// Directory searched for the default config file
    search_dir: PathBuf,
}

impl ConfigLoader {
    /// Loader searching the current working directory
    pub fn new() -> Self {
        let search_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { search_dir }
    }

    /// Loader searching a specific directory
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            search_dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `emoji-catalog.yaml` in the
    /// search directory is used if present, and defaults otherwise.
    pub fn load(&self, explicit: Option<&Path>) -> Result<PipelineConfig> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(EmojiCatalogError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let candidate = self.search_dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    debug!("No config file found, using defaults");
                    return Ok(PipelineConfig::default());
                }
                candidate
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            EmojiCatalogError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&contents).map_err(|e| {
            EmojiCatalogError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a YAML config document
    pub fn from_yaml(contents: &str) -> Result<PipelineConfig> {
        let config: PipelineConfig = if contents.trim().is_empty() {
            PipelineConfig::default()
        } else {
            serde_yaml_ng::from_str(contents)?
        };
        Self::validate(&config)?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(config: &PipelineConfig) -> Result<()> {
        if config.output_dir.as_os_str().is_empty() {
            return Err(EmojiCatalogError::Config(
                "output_dir must not be empty".to_string(),
            ));
        }

        if config.workers == Some(0) {
            return Err(EmojiCatalogError::Config(
                "workers must be at least 1".to_string(),
            ));
        }

        if let Some(workers) = config.workers.filter(|&w| w > Semaphore::MAX_PERMITS) {
            return Err(EmojiCatalogError::Config(format!(
                "workers must be at most {}, got {}",
                Semaphore::MAX_PERMITS,
                workers
            )));
        }

        if !config.source_url.contains("{release}") {
            return Err(EmojiCatalogError::Config(format!(
                "source_url must contain a {{release}} placeholder: {}",
                config.source_url
            )));
        }

        if let Some(languages) = &config.languages {
            if let Some(empty) = languages.iter().position(|l| l.trim().is_empty()) {
                return Err(EmojiCatalogError::Config(format!(
                    "languages[{empty}] must not be empty"
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
