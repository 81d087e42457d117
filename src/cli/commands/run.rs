use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use super::build::report;
use super::{CommandHandler, ConfigOverrides};
use crate::fetch::Downloader;
use crate::pipeline::Pipeline;
use crate::Result;

/// Handler for the `run` command: fetch, build, clean up
pub struct RunCommand {
    pub keep_source: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

#[async_trait]
impl CommandHandler for RunCommand {
    async fn execute(&self) -> Result<()> {
        let config = self.overrides.resolve()?;
        let url = config.source_url();
        let downloader = Downloader::new()?;

        // The temporary directory is removed on drop unless the source is kept
        let scratch = tempfile::Builder::new().prefix("cldr-release").tempdir()?;
        let dest = self
            .keep_source
            .clone()
            .unwrap_or_else(|| scratch.path().to_path_buf());

        let layout = downloader.fetch_release(&url, &dest).await?;
        let summary = Pipeline::new(config)
            .with_release_record()
            .run(&layout)
            .await?;
        report(&summary);

        if let Some(kept) = &self.keep_source {
            info!("Kept CLDR source at {}", kept.display());
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "run"
    }
}

impl RunCommand {
    /// Create new run command
    pub fn new(keep_source: Option<PathBuf>, overrides: ConfigOverrides) -> Self {
        Self {
            keep_source,
            overrides,
        }
    }
}
