//! Query functions over a caller-owned list of dinosaur records.
//!
//! Each function is a single linear scan over the slice. None of them keep
//! state between calls or fail: empty input and missing ids produce ordinary
//! values.

use crate::domain::model::{is_truthy, DinosaurRecord};
use serde_json::Value;
use std::collections::HashMap;

/// Returns `{ name: feet }` for the longest dinosaur, or an empty map.
///
/// The running maximum starts at zero and is only replaced by a strictly
/// longer record, so the first of several equally long records wins and a
/// record of length zero is never reported.
pub fn longest_dinosaur(dinosaurs: &[DinosaurRecord]) -> HashMap<String, f64> {
    let mut longest: Option<&DinosaurRecord> = None;
    let mut max_length = 0.0;

    for dino in dinosaurs {
        if max_length < dino.meters() {
            max_length = dino.meters();
            longest = Some(dino);
        }
    }

    tracing::debug!(
        "Longest dinosaur among {} records: {:?}",
        dinosaurs.len(),
        longest.map(|d| d.name.as_str())
    );

    longest
        .map(|dino| HashMap::from([(dino.name.clone(), dino.length_in_feet())]))
        .unwrap_or_default()
}

/// Formats the description of the dinosaur with the given id.
///
/// A missing id is not an error; the returned text says it cannot be found.
pub fn dinosaur_description(dinosaurs: &[DinosaurRecord], id: &str) -> String {
    match dinosaurs.iter().find(|dino| dino.id == id) {
        Some(dino) => format!(
            "{} ({})\n{} It lived in the {} period, over {} million years ago.",
            dino.name,
            dino.pronunciation,
            dino.info,
            dino.period,
            dino.mya.era_value()
        ),
        None => {
            tracing::debug!("No dinosaur with id '{}'", id);
            format!("A dinosaur with an ID of '{}' cannot be found.", id)
        }
    }
}

/// Values of `key` (or ids) for every dinosaur alive `mya` million years ago.
///
/// Falls back to the id when no key is given, the record has no such field,
/// or the field is falsy. Input order is kept.
pub fn dinosaurs_alive_mya(dinosaurs: &[DinosaurRecord], mya: f64, key: Option<&str>) -> Vec<Value> {
    let alive: Vec<Value> = dinosaurs
        .iter()
        .filter(|dino| dino.mya.contains(mya))
        .map(|dino| {
            key.and_then(|key| dino.field(key))
                .filter(is_truthy)
                .unwrap_or_else(|| Value::from(dino.id.as_str()))
        })
        .collect();

    tracing::debug!(
        "{} of {} dinosaurs alive at {} mya (key: {:?})",
        alive.len(),
        dinosaurs.len(),
        mya,
        key
    );

    alive
}
