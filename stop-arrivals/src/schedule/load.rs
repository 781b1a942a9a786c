//! Conversion from a parsed GTFS feed into a [`Schedule`].

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use gtfs_structures::Gtfs;
use tracing::{debug, warn};

use crate::domain::Offset;

use super::error::ScheduleError;
use super::model::{Route, Schedule, Stop, StopTime, Trip};

/// Parse a zipped GTFS archive held in memory.
pub fn parse_archive(bytes: &[u8]) -> Result<Schedule, ScheduleError> {
    let gtfs = Gtfs::from_reader(Cursor::new(bytes))?;
    let schedule = from_gtfs(&gtfs);

    debug!(
        stops = schedule.stops().len(),
        trips = schedule.trips().len(),
        stop_times = schedule.stop_time_count(),
        "parsed schedule archive"
    );

    Ok(schedule)
}

/// Build a [`Schedule`] from a feed already parsed by `gtfs_structures`.
///
/// Missing stop names become empty strings. A route without a short name is
/// labelled with its identifier. A call without an arrival time falls back
/// to its departure time.
pub fn from_gtfs(gtfs: &Gtfs) -> Schedule {
    let stops: HashMap<&str, Arc<Stop>> = gtfs
        .stops
        .values()
        .map(|s| {
            let name = s.name.clone().unwrap_or_default();
            (s.id.as_str(), Arc::new(Stop::new(&s.id, name)))
        })
        .collect();

    let routes: HashMap<&str, Arc<Route>> = gtfs
        .routes
        .values()
        .map(|r| {
            let label = r
                .short_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| r.id.clone());
            (r.id.as_str(), Arc::new(Route::new(&r.id, label)))
        })
        .collect();

    let mut unknown_routes = 0usize;
    let trips: Vec<Trip> = gtfs
        .trips
        .values()
        .map(|trip| {
            let route = match routes.get(trip.route_id.as_str()) {
                Some(route) => route.clone(),
                None => {
                    unknown_routes += 1;
                    Arc::new(Route::new(&trip.route_id, &trip.route_id))
                }
            };

            let mut calls: Vec<(u32, StopTime)> = trip
                .stop_times
                .iter()
                .filter_map(|st| {
                    let stop = stops.get(st.stop.id.as_str())?.clone();
                    let arrival = st
                        .arrival_time
                        .or(st.departure_time)
                        .map(Offset::from_seconds);
                    Some((st.stop_sequence, StopTime::new(stop, arrival)))
                })
                .collect();
            calls.sort_by_key(|(sequence, _)| *sequence);

            Trip {
                id: trip.id.clone(),
                route,
                headsign: trip.trip_headsign.clone().unwrap_or_default(),
                stop_times: calls.into_iter().map(|(_, call)| call).collect(),
            }
        })
        .collect();

    if unknown_routes > 0 {
        warn!(unknown_routes, "trips reference routes missing from the feed");
    }

    Schedule::new(stops.into_values().collect(), trips)
}
