//! HTTP download of the schedule archive.

use tracing::debug;

use super::config::FeedConfig;
use super::error::FeedError;

/// Something that can produce the raw bytes of a schedule archive.
pub trait ArchiveSource {
    /// Fetch the full archive.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, FeedError>>;
}

/// Downloads the archive with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a new client for the configured source URL.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            url: config.source_url.clone(),
        })
    }

    /// The URL this client downloads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ArchiveSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        debug!(url = %self.url, "requesting schedule archive");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
