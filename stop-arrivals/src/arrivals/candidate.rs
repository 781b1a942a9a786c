//! Arrival candidates and their grouping key.

use crate::domain::Offset;

/// One scheduled arrival of a trip at a matched stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalCandidate {
    /// Route short name ("Line").
    pub route_label: String,
    /// Trip headsign, as written in the feed.
    pub direction_label: String,
    /// Display name of the stop the trip calls at.
    pub stop_name: String,
    /// Scheduled arrival offset.
    pub arrival: Offset,
}

impl ArrivalCandidate {
    /// The service direction this arrival belongs to.
    pub fn key(&self) -> GroupingKey {
        GroupingKey {
            direction: self.direction_label.clone(),
            route: self.route_label.clone(),
        }
    }
}

/// A (direction, route) pair. At most one arrival is kept per key.
///
/// Uses the raw headsign, so two headsigns differing only in case are
/// distinct directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupingKey {
    pub direction: String,
    pub route: String,
}

impl GroupingKey {
    pub fn new(direction: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            route: route.into(),
        }
    }
}
