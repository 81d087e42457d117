pub mod build;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod languages;
#[cfg(feature = "fetch")]
pub mod run;

use async_trait::async_trait;
use std::path::PathBuf;

use crate::config::{ConfigLoader, FailurePolicy, PipelineConfig};
use crate::Result;

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler {
    /// Execute the command
    async fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config: Option<PathBuf>,
    pub release: Option<String>,
    pub output: Option<PathBuf>,
    pub previous: Option<PathBuf>,
    pub languages: Vec<String>,
    pub isolate_failures: bool,
    pub workers: Option<usize>,
}

impl ConfigOverrides {
    /// Load the config file and apply these overrides on top
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let mut config = ConfigLoader::new().load(self.config.as_deref())?;
        self.apply(&mut config);
        ConfigLoader::validate(&config)?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(release) = &self.release {
            config.cldr_release = release.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(previous) = &self.previous {
            config.previous_global = previous.clone();
        }
        if !self.languages.is_empty() {
            config.languages = Some(self.languages.clone());
        }
        if self.isolate_failures {
            config.failure_policy = FailurePolicy::Isolate;
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }
    }
}
