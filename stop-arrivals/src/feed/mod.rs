//! Schedule archive retrieval.
//!
//! The GTFS archive is fetched over HTTP on first use and kept in a flat
//! file in the working directory. Subsequent runs read the file instead.

mod cache;
mod client;
mod config;
mod error;

pub use cache::{ArchiveCache, ArchiveOrigin, CachedFeed};
pub use client::{ArchiveSource, HttpSource};
pub use config::{DEFAULT_CACHE_FILE, DEFAULT_SOURCE_URL, FeedConfig};
pub use error::FeedError;
