use crate::day::DayKey;
use crate::models::{
    DayTotals, DayView, ExerciseEntry, ExerciseView, SummaryLine, Week, WeekSummary,
};
use std::collections::BTreeMap;

pub fn exercise_completion(entry: &ExerciseEntry) -> (usize, usize) {
    let completed = entry.sets.iter().filter(|done| **done).count();
    (completed, entry.sets.len())
}

/// A day with no sets at all is never complete.
pub fn day_fully_completed(entries: &[ExerciseEntry]) -> bool {
    let (completed, total) = day_totals(entries);
    total > 0 && completed == total
}

pub fn day_totals(entries: &[ExerciseEntry]) -> (usize, usize) {
    entries.iter().fold((0, 0), |(completed, total), entry| {
        let (done, sets) = exercise_completion(entry);
        (completed + done, total + sets)
    })
}

pub fn day_view(day: DayKey, entries: &[ExerciseEntry], active: bool) -> DayView {
    let (completed_sets, total_sets) = day_totals(entries);
    DayView {
        day,
        label: day.label().to_string(),
        active,
        fully_completed: day_fully_completed(entries),
        completed_sets,
        total_sets,
        exercises: entries
            .iter()
            .map(|entry| {
                let (completed_sets, total_sets) = exercise_completion(entry);
                ExerciseView {
                    name: entry.name.clone(),
                    description: entry.description.clone(),
                    note: entry.note.clone(),
                    sets: entry.sets.clone(),
                    completed_sets,
                    total_sets,
                }
            })
            .collect(),
    }
}

pub fn week_summary(week: &Week, elapsed_seconds: u64) -> WeekSummary {
    let mut per_day = BTreeMap::new();
    let mut lines = Vec::new();
    let mut total_completed_sets = 0usize;
    let mut total_sets = 0usize;
    let mut completed_exercise_count = 0usize;
    let mut total_exercise_count = 0usize;

    for (day, entries) in week.iter() {
        let (completed, sets) = day_totals(entries);
        per_day.insert(
            day,
            DayTotals {
                completed_sets: completed,
                total_sets: sets,
            },
        );

        total_completed_sets += completed;
        total_sets += sets;
        total_exercise_count += entries.len();
        completed_exercise_count += entries
            .iter()
            .filter(|entry| {
                let (done, sets) = exercise_completion(entry);
                sets > 0 && done == sets
            })
            .count();

        if completed > 0 {
            lines.push(SummaryLine {
                day,
                label: day.label().to_string(),
                completed_sets: completed,
                total_sets: sets,
            });
        }
    }

    WeekSummary {
        per_day,
        lines,
        total_completed_sets,
        total_sets,
        completed_exercise_count,
        total_exercise_count,
        elapsed_seconds,
        elapsed_display: format_clock(elapsed_seconds),
    }
}

/// `HH:MM:SS`, hours are not wrapped.
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sets: &[bool]) -> ExerciseEntry {
        let mut entry = ExerciseEntry::new("Lift", sets.len(), None);
        entry.sets = sets.to_vec();
        entry
    }

    #[test]
    fn mixed_day_counts_sets_but_is_not_complete() {
        let mut week = Week::new();
        week.set_day(
            DayKey::Monday,
            vec![entry(&[true, true]), entry(&[false, false, true])],
        );

        let summary = week_summary(&week, 0);
        assert_eq!(
            summary.per_day[&DayKey::Monday],
            DayTotals {
                completed_sets: 3,
                total_sets: 5
            }
        );
        assert!(!day_fully_completed(week.day(DayKey::Monday)));
        assert_eq!(summary.completed_exercise_count, 1);
        assert_eq!(summary.total_exercise_count, 2);
    }

    #[test]
    fn empty_day_is_never_complete() {
        assert!(!day_fully_completed(&[]));
        assert!(day_fully_completed(&[entry(&[true]), entry(&[true, true])]));
    }

    #[test]
    fn summary_lists_only_days_with_progress() {
        let mut week = Week::new();
        week.set_day(DayKey::Sunday, vec![entry(&[false, false])]);
        week.set_day(DayKey::Thursday, vec![entry(&[true, false])]);
        week.set_day(DayKey::Tuesday, vec![entry(&[true])]);

        let summary = week_summary(&week, 3725);
        let days: Vec<DayKey> = summary.lines.iter().map(|line| line.day).collect();
        assert_eq!(days, vec![DayKey::Tuesday, DayKey::Thursday]);
        assert_eq!(summary.per_day.len(), 7);
        assert_eq!(summary.total_completed_sets, 2);
        assert_eq!(summary.total_sets, 5);
        assert_eq!(summary.elapsed_display, "01:02:05");
    }

    #[test]
    fn summary_is_stable_for_same_state() {
        let mut week = Week::new();
        week.set_day(DayKey::Friday, vec![entry(&[true, false, true])]);
        assert_eq!(week_summary(&week, 42), week_summary(&week, 42));
    }

    #[test]
    fn day_view_reports_per_exercise_counts() {
        let entries = vec![entry(&[true, false]), entry(&[true])];
        let view = day_view(DayKey::Wednesday, &entries, true);
        assert_eq!(view.completed_sets, 2);
        assert_eq!(view.total_sets, 3);
        assert_eq!(view.exercises[0].completed_sets, 1);
        assert_eq!(view.exercises[1].total_sets, 1);
        assert!(view.active);
        assert!(!view.fully_completed);
    }
}
