//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::arrivals::StopQuery;
use crate::domain::TimeOfDay;
use crate::feed::{DEFAULT_CACHE_FILE, DEFAULT_SOURCE_URL, FeedConfig};

/// Next scheduled arrivals at a public transport stop.
#[derive(Debug, Parser)]
#[command(name = "stop-arrivals", version)]
pub struct Cli {
    /// Local copy of the GTFS archive, downloaded if missing
    #[arg(long, global = true, default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,

    /// Where to download the GTFS archive from
    #[arg(long, global = true, default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the next arrival per line and direction at stops matching NAME
    Stop {
        /// Case-sensitive part of the stop name, e.g. "Plac Grunwaldzki"
        #[arg(value_parser = StopQuery::parse)]
        name: StopQuery,

        /// Look up as of this time (HH:MM) instead of now
        #[arg(long, value_parser = TimeOfDay::parse_hhmm)]
        at: Option<TimeOfDay>,
    },
}

impl Cli {
    /// Feed settings from the global flags.
    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig::default()
            .with_source_url(&self.source_url)
            .with_cache_path(&self.cache)
    }
}
