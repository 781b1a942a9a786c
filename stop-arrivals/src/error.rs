//! Top-level error type.

use crate::feed::FeedError;
use crate::schedule::ScheduleError;

/// Fatal errors. Any of these ends the run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The schedule archive could not be obtained
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// The schedule archive could not be parsed
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Writing the report failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
