//! Feed fetch error types.

use std::path::PathBuf;

/// Errors that can occur while obtaining the schedule archive.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Source answered with a non-success status
    #[error("download failed with status {status}")]
    Status { status: u16 },

    /// Reading or writing the local copy failed
    #[error("cache file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Status { status: 404 };
        assert_eq!(err.to_string(), "download failed with status 404");

        let err = FeedError::Io {
            path: PathBuf::from("transitData.zip"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cache file transitData.zip: denied");
    }
}
