use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use super::{CommandHandler, ConfigOverrides};
use crate::fetch::Downloader;
use crate::Result;

/// Handler for the `fetch` command
pub struct FetchCommand {
    pub dest: PathBuf,
    pub overrides: ConfigOverrides,
}

#[async_trait]
impl CommandHandler for FetchCommand {
    async fn execute(&self) -> Result<()> {
        let config = self.overrides.resolve()?;
        let layout = Downloader::new()?
            .fetch_release(&config.source_url(), &self.dest)
            .await?;

        info!(
            "CLDR release {} is ready at {}",
            config.cldr_release,
            layout.root.display()
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fetch"
    }
}

impl FetchCommand {
    /// Create new fetch command
    pub fn new(dest: PathBuf, overrides: ConfigOverrides) -> Self {
        Self { dest, overrides }
    }
}
