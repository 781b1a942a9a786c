//! Stop resolution by name.

use std::collections::HashSet;
use std::sync::Arc;

use crate::schedule::Stop;

/// Identifiers of every stop whose name contains `query`.
///
/// Plain case-sensitive substring match.
pub fn resolve_stops<'a>(stops: &'a [Arc<Stop>], query: &str) -> HashSet<&'a str> {
    stops
        .iter()
        .filter(|stop| stop.name.contains(query))
        .map(|stop| stop.id.as_str())
        .collect()
}
