//! CLDR release download
//!
//! Fetches the release source archive (a gzipped tarball) and unpacks it,
//! then locates the release root inside the extraction directory.

use std::io::Cursor;
use std::path::Path;
use tracing::info;

use crate::io::CldrLayout;
use crate::{EmojiCatalogError, Result};

/// Downloads and unpacks CLDR release archives
pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("emoji-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EmojiCatalogError::Fetch(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Download an archive into memory
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        info!("Downloading CLDR data from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EmojiCatalogError::Fetch(format!("Failed to download {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(EmojiCatalogError::Fetch(format!(
                "Download failed: HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| EmojiCatalogError::Fetch(format!("Failed to read response body: {e}")))?;

        info!("Download complete ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Download and unpack a release into `dest`, returning its layout
    pub async fn fetch_release(&self, url: &str, dest: &Path) -> Result<CldrLayout> {
        let bytes = self.download(url).await?;

        // tar does not support async
        let dest_owned = dest.to_path_buf();
        tokio::task::spawn_blocking(move || unpack_archive(&bytes, &dest_owned))
            .await
            .map_err(|e| EmojiCatalogError::Generic(e.into()))??;

        CldrLayout::discover(dest)
    }
}

/// Extract gzipped tarball bytes into a directory
pub fn unpack_archive(bytes: &[u8], dest: &Path) -> Result<()> {
    info!("Extracting CLDR data to {}", dest.display());
    std::fs::create_dir_all(dest)?;

    let decoder = flate2::read::GzDecoder::new(Cursor::new(bytes));
    let mut archive = tar::Archive::new(decoder);
    archive
        .unpack(dest)
        .map_err(|e| EmojiCatalogError::Fetch(format!("Failed to extract archive: {e}")))?;

    info!("Extraction complete");
    Ok(())
}
