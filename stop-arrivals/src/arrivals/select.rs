//! Earliest-upcoming arrival selection.
//!
//! Reduces a list of candidates to the next arrival per service direction.
//! "Next" is measured against a caller-supplied time of day so the result
//! does not depend on the wall clock.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::TimeOfDay;

use super::candidate::{ArrivalCandidate, GroupingKey};

/// Keep, per (direction, route), the candidate arriving soonest at or after `now`.
///
/// Candidates already behind `now` are dropped even when they are the only
/// one for their key. A later candidate only replaces the kept one when it
/// is strictly sooner, so ties go to whichever came first.
///
/// Offsets are compared without wrapping: a call at 25:10 is 1510 minutes
/// and counts as upcoming for the whole service day.
///
/// The returned map has no meaningful iteration order.
pub fn select_earliest(
    candidates: impl IntoIterator<Item = ArrivalCandidate>,
    now: TimeOfDay,
) -> HashMap<GroupingKey, ArrivalCandidate> {
    let mut winners: HashMap<GroupingKey, (i64, ArrivalCandidate)> = HashMap::new();

    for candidate in candidates {
        let diff = candidate.arrival.minutes_after(now);
        if diff < 0 {
            continue;
        }

        match winners.entry(candidate.key()) {
            Entry::Occupied(mut kept) => {
                if diff < kept.get().0 {
                    kept.insert((diff, candidate));
                }
            }
            Entry::Vacant(slot) => {
                slot.insert((diff, candidate));
            }
        }
    }

    winners
        .into_iter()
        .map(|(key, (_, candidate))| (key, candidate))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Offset;
    use proptest::prelude::*;

    prop_compose! {
        fn arb_candidate()(
            line in prop::sample::select(vec!["12", "33", "N"]),
            direction in prop::sample::select(vec!["Centrum", "Sępolno", "Leśnica"]),
            stop in prop::sample::select(vec!["Rynek", "Plac Grunwaldzki"]),
            minutes in 0u32..1800,
        ) -> ArrivalCandidate {
            ArrivalCandidate {
                route_label: line.to_string(),
                direction_label: direction.to_string(),
                stop_name: stop.to_string(),
                arrival: Offset::from_minutes(minutes),
            }
        }
    }

    prop_compose! {
        fn arb_now()(minutes in 0u32..1440) -> TimeOfDay {
            TimeOfDay::from_minutes(minutes).unwrap()
        }
    }

    proptest! {
        /// Every winner is stored under its own key
        #[test]
        fn winners_match_their_key(
            candidates in prop::collection::vec(arb_candidate(), 0..40),
            now in arb_now(),
        ) {
            let winners = select_earliest(candidates, now);
            for (key, winner) in &winners {
                prop_assert_eq!(key, &winner.key());
            }
        }

        /// No arrival behind `now` is ever returned
        #[test]
        fn no_past_arrivals(
            candidates in prop::collection::vec(arb_candidate(), 0..40),
            now in arb_now(),
        ) {
            let winners = select_earliest(candidates, now);
            for winner in winners.values() {
                prop_assert!(winner.arrival.minutes_after(now) >= 0);
            }
        }

        /// Each key present in the input with an upcoming arrival appears,
        /// holding the minimum upcoming offset for that key
        #[test]
        fn winner_is_minimum_upcoming(
            candidates in prop::collection::vec(arb_candidate(), 0..40),
            now in arb_now(),
        ) {
            let mut expected: HashMap<GroupingKey, u32> = HashMap::new();
            for c in &candidates {
                if c.arrival.minutes_after(now) >= 0 {
                    let best = expected.entry(c.key()).or_insert(c.arrival.minutes());
                    *best = (*best).min(c.arrival.minutes());
                }
            }

            let winners = select_earliest(candidates, now);
            prop_assert_eq!(winners.len(), expected.len());
            for (key, minutes) in expected {
                prop_assert_eq!(winners[&key].arrival.minutes(), minutes);
            }
        }

        /// Input order does not change which offset wins
        #[test]
        fn order_independent_offsets(
            candidates in prop::collection::vec(arb_candidate(), 0..40),
            now in arb_now(),
        ) {
            let mut reversed = candidates.clone();
            reversed.reverse();

            let forward = select_earliest(candidates, now);
            let backward = select_earliest(reversed, now);

            prop_assert_eq!(forward.len(), backward.len());
            for (key, winner) in &forward {
                prop_assert_eq!(winner.arrival, backward[key].arrival);
            }
        }

        /// Among equal offsets the first-seen candidate wins
        #[test]
        fn ties_keep_first_seen(
            candidates in prop::collection::vec(arb_candidate(), 1..40),
            now in arb_now(),
        ) {
            let winners = select_earliest(candidates.clone(), now);
            for (key, winner) in &winners {
                let first = candidates
                    .iter()
                    .find(|c| &c.key() == key && c.arrival == winner.arrival)
                    .unwrap();
                prop_assert_eq!(first, winner);
            }
        }

        /// Selecting twice gives the same winners
        #[test]
        fn idempotent(
            candidates in prop::collection::vec(arb_candidate(), 0..40),
            now in arb_now(),
        ) {
            let first = select_earliest(candidates.clone(), now);
            let second = select_earliest(candidates, now);
            prop_assert_eq!(first, second);
        }
    }
}
