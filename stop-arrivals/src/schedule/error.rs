//! Schedule loading error types.

/// Errors that can occur while turning an archive into a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The archive could not be read as a GTFS feed
    #[error("failed to parse GTFS archive: {0}")]
    Parse(#[from] gtfs_structures::Error),
}
