//! Next-arrival lookup for a named stop.
//!
//! A lookup runs in three steps over an immutable [`Schedule`]:
//!
//! 1. resolve every stop whose name contains the query
//! 2. collect one candidate arrival per trip calling at those stops
//! 3. keep the soonest upcoming candidate per (direction, route)

mod candidate;
mod collect;
mod resolve;
mod select;

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::domain::TimeOfDay;
use crate::schedule::Schedule;

pub use candidate::{ArrivalCandidate, GroupingKey};
pub use collect::collect_candidates;
pub use resolve::resolve_stops;
pub use select::select_earliest;

/// Error returned for an unusable stop query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Query is empty or only whitespace
    #[error("stop name must not be empty")]
    EmptyStopName,
}

/// A validated stop-name substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopQuery(String);

impl StopQuery {
    /// Validate a stop-name query.
    ///
    /// The text is kept verbatim (matching is case-sensitive and includes
    /// surrounding spaces) but must contain something other than whitespace.
    pub fn parse(s: &str) -> Result<Self, QueryError> {
        if s.trim().is_empty() {
            return Err(QueryError::EmptyStopName);
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a stop lookup.
#[derive(Debug, Clone)]
pub struct StopArrivals {
    /// Number of stops whose name matched.
    pub matched_stops: usize,
    /// Number of candidate arrivals before selection.
    pub candidates: usize,
    /// Next arrival per (direction, route).
    pub arrivals: HashMap<GroupingKey, ArrivalCandidate>,
}

impl StopArrivals {
    /// True when no stop matched or no trip calls at the matched stops.
    ///
    /// An empty result after selection (everything already departed) is
    /// not counted here.
    pub fn nothing_scheduled(&self) -> bool {
        self.matched_stops == 0 || self.candidates == 0
    }
}

/// Find the next arrival per (direction, route) at stops matching `query`.
pub fn lookup(schedule: &Schedule, query: &StopQuery, now: TimeOfDay) -> StopArrivals {
    let matched = resolve_stops(schedule.stops(), query.as_str());
    let candidates = collect_candidates(schedule.trips(), &matched);
    let candidate_count = candidates.len();
    let arrivals = select_earliest(candidates, now);

    debug!(
        query = %query,
        %now,
        matched_stops = matched.len(),
        candidates = candidate_count,
        winners = arrivals.len(),
        "stop lookup"
    );

    StopArrivals {
        matched_stops: matched.len(),
        candidates: candidate_count,
        arrivals,
    }
}
