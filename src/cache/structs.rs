use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::cache_context;

/// File-based cache with two tiers: raw HTML pages keyed by URL path, and
/// parsed data keyed by name
pub struct Cache {
    cache_dir: PathBuf,
    raw_dir: PathBuf,
    parsed_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        let raw_dir = cache_dir.join("raw");
        let parsed_dir = cache_dir.join("parsed");

        fs::create_dir_all(&raw_dir).context("Failed to create raw cache directory")?;
        fs::create_dir_all(&parsed_dir).context("Failed to create parsed cache directory")?;

        Ok(Self {
            cache_dir,
            raw_dir,
            parsed_dir,
        })
    }

    /// Clear all cached data. Only the `raw` and `parsed` tiers are removed;
    /// anything else under the cache directory is left alone.
    pub fn clear(&self) -> Result<()> {
        fs::remove_dir_all(&self.raw_dir).context("Failed to clear raw cache")?;
        fs::remove_dir_all(&self.parsed_dir).context("Failed to clear parsed cache")?;

        fs::create_dir_all(&self.raw_dir).context("Failed to recreate raw cache directory")?;
        fs::create_dir_all(&self.parsed_dir)
            .context("Failed to recreate parsed cache directory")?;

        info!("Cleared cache directory {}", self.cache_dir.display());
        Ok(())
    }

    // --- Raw Pages ---

    /// Save a fetched page under its URL path
    pub fn save_page(&self, url_path: &str, html: &str) -> Result<()> {
        let file_path = self.build_raw_path(url_path);
        fs::write(&file_path, html).with_context(|| cache_context("write", url_path))?;
        debug!("Saved page to cache: {}", file_path.display());
        Ok(())
    }

    /// Load a previously fetched page
    pub fn load_page(&self, url_path: &str) -> Result<Option<String>> {
        let file_path = self.build_raw_path(url_path);
        if !file_path.exists() {
            return Ok(None);
        }

        let html =
            fs::read_to_string(&file_path).with_context(|| cache_context("read", url_path))?;
        Ok(Some(html))
    }

    pub fn has_page(&self, url_path: &str) -> bool {
        self.build_raw_path(url_path).exists()
    }

    // --- Parsed Data ---

    /// Save parsed data to cache
    pub fn save_parsed<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.build_parsed_path(key);
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        fs::write(&file_path, json).with_context(|| cache_context("write", key))?;
        info!("Saved parsed data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load parsed data from cache
    pub fn load_parsed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_parsed_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).with_context(|| cache_context("read", key))?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                file_path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }

    // --- Helper Methods ---

    fn build_raw_path(&self, url_path: &str) -> PathBuf {
        self.raw_dir.join(format!("{}.html", page_key(url_path)))
    }

    fn build_parsed_path(&self, key: &str) -> PathBuf {
        self.parsed_dir.join(format!("{}.json", key))
    }
}

/// File-name-safe key for a URL path (`/tournaments/x` -> `%2Ftournaments%2Fx`)
fn page_key(url_path: &str) -> String {
    urlencoding::encode(url_path).into_owned()
}
