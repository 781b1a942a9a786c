//! Disk cache for the schedule archive.
//!
//! The archive is downloaded once and kept as a flat file. Later runs read
//! the file whenever it exists; there is no expiry and no locking.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::client::ArchiveSource;
use super::error::FeedError;

/// Permissions of a freshly written cache file (owner rw, others r).
#[cfg(unix)]
const CACHE_FILE_MODE: u32 = 0o644;

/// Where the archive bytes came from on this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveOrigin {
    /// Read from the local cache file.
    Cache,
    /// Downloaded from the source and written to the cache.
    Download,
}

/// Flat-file cache for the raw archive.
#[derive(Debug, Clone)]
pub struct ArchiveCache {
    path: PathBuf,
}

impl ArchiveCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether a cached copy exists. Only the path is checked.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the cached archive.
    pub fn load(&self) -> Result<Vec<u8>, FeedError> {
        std::fs::read(&self.path).map_err(|source| self.io_error(source))
    }

    /// Write the archive, replacing any existing copy.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, bytes: &[u8]) -> Result<(), FeedError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(CACHE_FILE_MODE);
        }

        let mut file = options
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        file.write_all(bytes)
            .map_err(|source| self.io_error(source))?;

        Ok(())
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> FeedError {
        FeedError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Archive source backed by a local cache.
///
/// Wraps an [`ArchiveSource`] and only calls it when no cached copy exists.
pub struct CachedFeed<S> {
    source: S,
    cache: ArchiveCache,
}

impl<S: ArchiveSource> CachedFeed<S> {
    pub fn new(source: S, cache: ArchiveCache) -> Self {
        Self { source, cache }
    }

    /// Get the archive bytes, downloading them first if not cached.
    pub async fn archive(&self) -> Result<(Vec<u8>, ArchiveOrigin), FeedError> {
        if self.cache.exists() {
            let bytes = self.cache.load()?;
            debug!(
                path = %self.cache.path().display(),
                bytes = bytes.len(),
                "using cached schedule archive"
            );
            return Ok((bytes, ArchiveOrigin::Cache));
        }

        println!("Downloading transit data...");
        let bytes = self.source.fetch().await?;
        info!(
            path = %self.cache.path().display(),
            bytes = bytes.len(),
            "downloaded schedule archive"
        );

        self.cache.save(&bytes)?;
        Ok((bytes, ArchiveOrigin::Download))
    }

    /// Access the underlying cache.
    pub fn cache(&self) -> &ArchiveCache {
        &self.cache
    }
}
