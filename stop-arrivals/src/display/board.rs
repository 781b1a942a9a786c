//! Arrivals board rendering.

use std::collections::HashMap;

use crate::arrivals::{ArrivalCandidate, GroupingKey};

use super::table::Table;
use super::text::title_case;

/// Column headers: line, direction, arrival, stop.
pub const BOARD_HEADERS: [&str; 4] = ["Linia", "Kierunek", "Przyjazd", "Przystanek"];

/// Notice printed when no trip calls at the requested stop.
pub const NO_ARRIVALS_NOTICE: &str = "No arrivals found";

/// Build the arrivals table.
///
/// Rows are ordered by arrival, then line, then raw direction. Directions
/// are title-cased; arrival offsets are shown as wall-clock times.
pub fn arrivals_table(arrivals: &HashMap<GroupingKey, ArrivalCandidate>) -> Table {
    let mut rows: Vec<&ArrivalCandidate> = arrivals.values().collect();
    rows.sort_by(|a, b| {
        a.arrival
            .cmp(&b.arrival)
            .then_with(|| a.route_label.cmp(&b.route_label))
            .then_with(|| a.direction_label.cmp(&b.direction_label))
    });

    let mut table = Table::new(BOARD_HEADERS);
    for arrival in rows {
        table.add_row([
            arrival.route_label.clone(),
            title_case(&arrival.direction_label),
            arrival.arrival.to_clock(),
            arrival.stop_name.clone(),
        ]);
    }
    table
}
