//! Candidate collection over trips.

use std::collections::HashSet;

use crate::schedule::Trip;

use super::candidate::ArrivalCandidate;

/// One candidate per trip that calls at any of the `matched` stops.
///
/// Only the first timed call at a matched stop (in stop-sequence order)
/// counts, so a trip looping back past the same stop is not listed twice.
pub fn collect_candidates(trips: &[Trip], matched: &HashSet<&str>) -> Vec<ArrivalCandidate> {
    if matched.is_empty() {
        return Vec::new();
    }

    trips
        .iter()
        .filter_map(|trip| {
            trip.stop_times.iter().find_map(|call| {
                if !matched.contains(call.stop.id.as_str()) {
                    return None;
                }
                let arrival = call.arrival?;
                Some(ArrivalCandidate {
                    route_label: trip.route.short_name.clone(),
                    direction_label: trip.headsign.clone(),
                    stop_name: call.stop.name.clone(),
                    arrival,
                })
            })
        })
        .collect()
}
