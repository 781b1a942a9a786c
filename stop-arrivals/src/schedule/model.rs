//! In-memory static schedule.
//!
//! A trimmed view of a GTFS feed holding only what arrival lookups need.
//! Built once per run and never mutated afterwards.

use std::sync::Arc;

use crate::domain::Offset;

/// A stop (platform or pole) from `stops.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Unique stop identifier.
    pub id: String,
    /// Display name. Not unique: several stops usually share one name.
    pub name: String,
}

impl Stop {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A route from `routes.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique route identifier.
    pub id: String,
    /// Rider-facing line number, e.g. "12" or "A".
    pub short_name: String,
}

impl Route {
    pub fn new(id: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short_name: short_name.into(),
        }
    }
}

/// A scheduled call of a trip at a stop.
#[derive(Debug, Clone)]
pub struct StopTime {
    /// The stop being called at.
    pub stop: Arc<Stop>,
    /// Scheduled arrival offset. `None` for calls the feed leaves untimed.
    pub arrival: Option<Offset>,
}

impl StopTime {
    pub fn new(stop: Arc<Stop>, arrival: Option<Offset>) -> Self {
        Self { stop, arrival }
    }
}

/// A single vehicle run along a route.
#[derive(Debug, Clone)]
pub struct Trip {
    /// Unique trip identifier.
    pub id: String,
    /// The route this trip runs on.
    pub route: Arc<Route>,
    /// Destination shown on the vehicle.
    pub headsign: String,
    /// Calls in stop-sequence order.
    pub stop_times: Vec<StopTime>,
}

/// Parsed static schedule.
///
/// Stops and trips are kept sorted by identifier so that every scan over
/// them visits records in the same order from run to run.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    stops: Vec<Arc<Stop>>,
    trips: Vec<Trip>,
}

impl Schedule {
    /// Create a schedule from already-linked stops and trips.
    pub fn new(mut stops: Vec<Arc<Stop>>, mut trips: Vec<Trip>) -> Self {
        stops.sort_by(|a, b| a.id.cmp(&b.id));
        trips.sort_by(|a, b| a.id.cmp(&b.id));
        Self { stops, trips }
    }

    /// All stops, ordered by identifier.
    pub fn stops(&self) -> &[Arc<Stop>] {
        &self.stops
    }

    /// All trips, ordered by identifier.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Total number of scheduled calls across all trips.
    pub fn stop_time_count(&self) -> usize {
        self.trips.iter().map(|t| t.stop_times.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: &str, route: &Arc<Route>) -> Trip {
        Trip {
            id: id.to_string(),
            route: route.clone(),
            headsign: "Centrum".to_string(),
            stop_times: vec![],
        }
    }

    #[test]
    fn new_sorts_by_id() {
        let route = Arc::new(Route::new("r1", "12"));
        let stops = vec![
            Arc::new(Stop::new("s2", "Rynek")),
            Arc::new(Stop::new("s1", "Dworzec Główny")),
        ];
        let trips = vec![trip("t3", &route), trip("t1", &route), trip("t2", &route)];

        let schedule = Schedule::new(stops, trips);

        let stop_ids: Vec<&str> = schedule.stops().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(stop_ids, vec!["s1", "s2"]);

        let trip_ids: Vec<&str> = schedule.trips().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(trip_ids, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn stop_time_count_sums_trips() {
        let route = Arc::new(Route::new("r1", "12"));
        let stop = Arc::new(Stop::new("s1", "Rynek"));
        let mut a = trip("a", &route);
        a.stop_times = vec![
            StopTime::new(stop.clone(), Some(Offset::from_minutes(1))),
            StopTime::new(stop.clone(), None),
        ];
        let mut b = trip("b", &route);
        b.stop_times = vec![StopTime::new(stop, Some(Offset::from_minutes(2)))];

        let schedule = Schedule::new(vec![], vec![a, b]);
        assert_eq!(schedule.stop_time_count(), 3);
    }

    #[test]
    fn empty_schedule() {
        let schedule = Schedule::default();
        assert!(schedule.stops().is_empty());
        assert!(schedule.trips().is_empty());
        assert_eq!(schedule.stop_time_count(), 0);
    }
}
