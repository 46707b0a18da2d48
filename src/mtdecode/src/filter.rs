//! Proximity filtering of near-duplicate entries
//!
//! The mod logs the same vein several times as the player walks past it.
//! Entries with the same name closer than a threshold to an already kept
//! entry are dropped. Quadratic in the number of entries, which stays in the
//! low hundreds for real logs.

use crate::Entry;

/// Find an accepted entry with the same name strictly closer than `min_distance`
fn find_close<'a>(entry: &Entry, accepted: &'a [Entry], min_distance: f64) -> Option<&'a Entry> {
    accepted
        .iter()
        .find(|kept| kept.name == entry.name && kept.distance_to(entry) < min_distance)
}

/// Drop entries near an earlier entry of the same name
///
/// Keeps first-seen order. An entry exactly `min_distance` away is kept.
pub fn filter_nearby(entries: Vec<Entry>, min_distance: f64) -> Vec<Entry> {
    let mut accepted: Vec<Entry> = Vec::with_capacity(entries.len());

    for entry in entries {
        if let Some(close) = find_close(&entry, &accepted, min_distance) {
            tracing::debug!("Entry {} is too close to entry {}, discarding", entry, close);
            continue;
        }
        accepted.push(entry);
    }

    accepted
}
