//! Domain types for stop arrival lookups.
//!
//! Schedule offsets and the reference time of day they are compared
//! against. Both are validated at construction time.

mod time;

pub use time::{MINUTES_PER_DAY, Offset, TimeError, TimeOfDay};
