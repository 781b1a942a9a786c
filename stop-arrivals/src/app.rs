//! Command execution.

use std::io::Write;

use tracing::debug;

use crate::arrivals::{StopArrivals, StopQuery, lookup};
use crate::cli::{Cli, Command};
use crate::display::{NO_ARRIVALS_NOTICE, arrivals_table};
use crate::domain::{Offset, TimeOfDay};
use crate::error::AppError;
use crate::feed::{ArchiveCache, ArchiveSource, CachedFeed, HttpSource};
use crate::schedule::parse_archive;

/// Run a parsed command line, writing the report to `out`.
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<(), AppError> {
    let config = cli.feed_config();

    match cli.command {
        Command::Stop { name, at } => {
            let source = HttpSource::new(&config)?;
            let feed = CachedFeed::new(source, ArchiveCache::new(&config.cache_path));
            let now = at.unwrap_or_else(TimeOfDay::now);
            stop_arrivals(&feed, &name, now, out).await
        }
    }
}

/// Fetch (or reuse) the schedule, look up `query` and write the board.
pub async fn stop_arrivals<S: ArchiveSource>(
    feed: &CachedFeed<S>,
    query: &StopQuery,
    now: TimeOfDay,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let (bytes, origin) = feed.archive().await?;
    debug!(?origin, bytes = bytes.len(), "schedule archive ready");

    let schedule = parse_archive(&bytes)?;
    let result = lookup(&schedule, query, now);

    for arrival in result.arrivals.values() {
        let wait = arrival.arrival.minutes_after(now);
        debug!(
            line = %arrival.route_label,
            direction = %arrival.direction_label,
            arrival = %arrival.arrival,
            wait = %Offset::from_minutes(wait.max(0) as u32).to_span(),
            "next arrival"
        );
    }

    out.write_all(report(&result).as_bytes())?;
    Ok(())
}

/// Render a lookup result: the notice when nothing is scheduled, then the
/// table (possibly with headers only).
pub fn report(result: &StopArrivals) -> String {
    let mut text = String::new();
    if result.nothing_scheduled() {
        text.push_str(NO_ARRIVALS_NOTICE);
        text.push('\n');
    }
    text.push_str(&arrivals_table(&result.arrivals).render());
    text
}
