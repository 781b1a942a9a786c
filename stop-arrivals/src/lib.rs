//! Next scheduled arrivals at a public transport stop.
//!
//! Downloads a static GTFS timetable once, keeps it in a local file, and
//! answers "when does each line next arrive here?" for a stop name.

pub mod app;
pub mod arrivals;
pub mod cli;
pub mod display;
pub mod domain;
pub mod error;
pub mod feed;
pub mod schedule;
