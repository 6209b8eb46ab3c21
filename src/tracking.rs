//! Per-day persistence of tracked progress.
//!
//! A day's set flags and notes are stored as one JSON snapshot under
//! `tracking-<day>`. Flags are flattened across exercises in document order,
//! so a snapshot is only meaningful against the layout it was captured from.
//! The layout itself is stored under `layout-<day>`.

use crate::day::DayKey;
use crate::models::{DaySnapshot, ExerciseEntry, LayoutEntry};
use crate::storage::KeyValueStore;
use tracing::warn;

pub fn tracking_key(day: DayKey) -> String {
    format!("tracking-{day}")
}

pub fn layout_key(day: DayKey) -> String {
    format!("layout-{day}")
}

pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, day: DayKey, snapshot: &DaySnapshot) {
    match serde_json::to_string(snapshot) {
        Ok(payload) => store.set_item(&tracking_key(day), payload),
        Err(err) => warn!("failed to encode snapshot for {day}: {err}"),
    }
}

/// Returns `None` when nothing is stored or the stored value is unreadable.
pub fn load<S: KeyValueStore + ?Sized>(store: &S, day: DayKey) -> Option<DaySnapshot> {
    let raw = store.get_item(&tracking_key(day))?;
    match serde_json::from_str(&raw) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            warn!("ignoring corrupt snapshot for {day}: {err}");
            None
        }
    }
}

pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S, day: DayKey) {
    store.remove_item(&tracking_key(day));
}

pub fn save_layout<S: KeyValueStore + ?Sized>(store: &mut S, day: DayKey, entries: &[ExerciseEntry]) {
    let layout: Vec<LayoutEntry> = entries
        .iter()
        .map(|entry| LayoutEntry {
            name: entry.name.clone(),
            sets: entry.sets.len(),
            description: entry.description.clone(),
        })
        .collect();

    match serde_json::to_string(&layout) {
        Ok(payload) => store.set_item(&layout_key(day), payload),
        Err(err) => warn!("failed to encode layout for {day}: {err}"),
    }
}

/// Rebuilds a day's entries from its stored layout, all sets unchecked.
pub fn load_layout<S: KeyValueStore + ?Sized>(store: &S, day: DayKey) -> Option<Vec<ExerciseEntry>> {
    let raw = store.get_item(&layout_key(day))?;
    match serde_json::from_str::<Vec<LayoutEntry>>(&raw) {
        Ok(layout) => Some(
            layout
                .into_iter()
                .map(|entry| ExerciseEntry::new(entry.name, entry.sets, entry.description))
                .collect(),
        ),
        Err(err) => {
            warn!("ignoring corrupt layout for {day}: {err}");
            None
        }
    }
}

impl DaySnapshot {
    /// Flattens the live entries: every set flag in order, then one note per
    /// exercise.
    pub fn capture(entries: &[ExerciseEntry]) -> Self {
        Self {
            states: entries.iter().flat_map(|entry| entry.sets.iter().copied()).collect(),
            notes: entries.iter().map(|entry| entry.note.clone()).collect(),
        }
    }

    /// Applies the snapshot positionally. Missing flags read as unchecked and
    /// missing or empty notes leave the current note alone. Returns `false`
    /// when the snapshot shape differs from the entries' shape; the values are
    /// applied anyway.
    pub fn apply(&self, entries: &mut [ExerciseEntry]) -> bool {
        let mut index = 0;
        for entry in entries.iter_mut() {
            for flag in entry.sets.iter_mut() {
                *flag = self.states.get(index).copied().unwrap_or(false);
                index += 1;
            }
        }

        for (entry, note) in entries.iter_mut().zip(&self.notes) {
            if !note.is_empty() {
                entry.note = note.clone();
            }
        }

        index == self.states.len() && entries.len() == self.notes.len()
    }
}
