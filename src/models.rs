use crate::day::DayKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_SETS: usize = 1;
pub const MAX_SETS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: Vec<bool>,
    pub description: Option<String>,
    pub note: String,
}

impl ExerciseEntry {
    /// New entry with every set unchecked and an empty note. The set count is
    /// clamped into `MIN_SETS..=MAX_SETS`.
    pub fn new(name: impl Into<String>, set_count: usize, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            sets: vec![false; set_count.clamp(MIN_SETS, MAX_SETS)],
            description: description.filter(|text| !text.trim().is_empty()),
            note: String::new(),
        }
    }
}

/// Every day's exercise list, always holding all seven days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    days: BTreeMap<DayKey, Vec<ExerciseEntry>>,
}

impl Default for Week {
    fn default() -> Self {
        Self::new()
    }
}

impl Week {
    pub fn new() -> Self {
        Self {
            days: DayKey::ALL.iter().map(|day| (*day, Vec::new())).collect(),
        }
    }

    pub fn day(&self, day: DayKey) -> &[ExerciseEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn day_mut(&mut self, day: DayKey) -> &mut Vec<ExerciseEntry> {
        self.days.entry(day).or_default()
    }

    pub fn set_day(&mut self, day: DayKey, entries: Vec<ExerciseEntry>) {
        self.days.insert(day, entries);
    }

    /// Days in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &[ExerciseEntry])> {
        DayKey::ALL.into_iter().map(|day| (day, self.day(day)))
    }
}

/// Persisted `{states, notes}` pair of one day, flattened in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub states: Vec<bool>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// One exercise of a persisted day layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub name: String,
    pub sets: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRef {
    pub day: DayKey,
    pub exercise: usize,
    pub set: usize,
}

#[derive(Debug, Deserialize)]
pub struct ToggleSetRequest {
    pub exercise: usize,
    pub set: usize,
    pub checked: bool,
}

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub exercise: usize,
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    pub name: String,
    #[serde(default = "default_set_count")]
    pub sets: usize,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_set_count() -> usize {
    3
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveExerciseQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditModeRequest {
    pub enabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct OpenModalRequest {
    pub modal: crate::modal::ModalKind,
    pub return_focus: String,
    #[serde(default)]
    pub focusables: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FocusRequest {
    pub direction: crate::modal::FocusMove,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FocusResponse {
    pub focused: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseView {
    pub name: String,
    pub description: Option<String>,
    pub note: String,
    pub sets: Vec<bool>,
    pub completed_sets: usize,
    pub total_sets: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayView {
    pub day: DayKey,
    pub label: String,
    pub active: bool,
    pub fully_completed: bool,
    pub completed_sets: usize,
    pub total_sets: usize,
    pub exercises: Vec<ExerciseView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleSetResponse {
    pub day: DayView,
    pub next_focus: Option<SetRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    pub completed_sets: usize,
    pub total_sets: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub day: DayKey,
    pub label: String,
    pub completed_sets: usize,
    pub total_sets: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub per_day: BTreeMap<DayKey, DayTotals>,
    pub lines: Vec<SummaryLine>,
    pub total_completed_sets: usize,
    pub total_sets: usize,
    pub completed_exercise_count: usize,
    pub total_exercise_count: usize,
    pub elapsed_seconds: u64,
    pub elapsed_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwatchView {
    pub elapsed_seconds: u64,
    pub display: String,
    pub running: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestTimerView {
    pub remaining_seconds: u32,
    pub display: String,
    pub running: bool,
    pub completed: bool,
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub reset_enabled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimersView {
    pub stopwatch: StopwatchView,
    pub rest: RestTimerView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EditModeResponse {
    pub edit_mode: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CloseModalResponse {
    pub restore_focus: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub active_day: DayKey,
    pub edit_mode: bool,
    pub days: Vec<DayView>,
    pub timers: TimersView,
    pub modal: Option<crate::modal::ModalKind>,
}
