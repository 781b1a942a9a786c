//! Static GTFS schedule.
//!
//! Parses a zipped GTFS feed with `gtfs_structures` and keeps the parts an
//! arrival lookup reads: stops, routes, and trips with their timed calls.

mod error;
mod load;
mod model;

pub use error::ScheduleError;
pub use load::{from_gtfs, parse_archive};
pub use model::{Route, Schedule, Stop, StopTime, Trip};
