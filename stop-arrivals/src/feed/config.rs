//! Feed location configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default GTFS archive: Wrocław public transport timetable.
pub const DEFAULT_SOURCE_URL: &str = "https://www.wroclaw.pl/open-data/87b09b32-f076-4475-8ec9-6020ed1f9ac0/OtwartyWroclaw_rozklad_jazdy_GTFS.zip";

/// Default cache file, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = "transitData.zip";

/// Where the schedule archive comes from and where it is kept.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL the archive is downloaded from on first use.
    pub source_url: String,
    /// Local copy of the archive.
    pub cache_path: PathBuf,
    /// Request timeout. `None` waits for as long as the download takes.
    pub timeout: Option<Duration>,
}

impl FeedConfig {
    /// Create a config for the given source and cache path, without a timeout.
    pub fn new(source_url: impl Into<String>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            cache_path: cache_path.into(),
            timeout: None,
        }
    }

    /// Set a custom source URL.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Set a custom cache path.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL, DEFAULT_CACHE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.cache_path, PathBuf::from("transitData.zip"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn config_overrides() {
        let config = FeedConfig::default()
            .with_source_url("http://localhost:8080/gtfs.zip")
            .with_cache_path("/tmp/gtfs.zip")
            .with_timeout(Duration::from_secs(30));
        assert_eq!(config.source_url, "http://localhost:8080/gtfs.zip");
        assert_eq!(config.cache_path, PathBuf::from("/tmp/gtfs.zip"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
