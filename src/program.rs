//! Built-in weekly program used before any layout has been saved.

use crate::day::DayKey;
use crate::models::{ExerciseEntry, Week};

#[derive(Debug, Clone, Copy)]
pub struct PlannedExercise {
    pub name: &'static str,
    pub sets: usize,
    pub description: Option<&'static str>,
}

const fn planned(name: &'static str, sets: usize, description: Option<&'static str>) -> PlannedExercise {
    PlannedExercise {
        name,
        sets,
        description,
    }
}

const SUNDAY: &[PlannedExercise] = &[
    planned("Mobility flow", 1, Some("10 minutes, hips and thoracic spine")),
    planned("Easy walk", 1, Some("30-45 minutes")),
];

const MONDAY: &[PlannedExercise] = &[
    planned("Back squat", 4, Some("6-8 reps")),
    planned("Romanian deadlift", 3, Some("8-10 reps")),
    planned("Walking lunge", 3, Some("12 steps each leg")),
    planned("Plank", 3, Some("45 seconds")),
];

const TUESDAY: &[PlannedExercise] = &[
    planned("Bench press", 4, Some("6-8 reps")),
    planned("Overhead press", 3, Some("8-10 reps")),
    planned("Dips", 3, Some("To near failure")),
    planned("Triceps pushdown", 3, Some("12-15 reps")),
];

const WEDNESDAY: &[PlannedExercise] = &[
    planned("Intervals", 6, Some("1 minute hard, 2 minutes easy")),
    planned("Hanging knee raise", 3, Some("12 reps")),
];

const THURSDAY: &[PlannedExercise] = &[
    planned("Pull-ups", 4, Some("6-10 reps")),
    planned("Barbell row", 4, Some("8 reps")),
    planned("Face pull", 3, Some("15 reps")),
    planned("Biceps curl", 3, Some("10-12 reps")),
];

const FRIDAY: &[PlannedExercise] = &[
    planned("Deadlift", 3, Some("5 reps")),
    planned("Front squat", 3, Some("8 reps")),
    planned("Calf raise", 4, Some("15 reps")),
];

const SATURDAY: &[PlannedExercise] = &[
    planned("Push-ups", 3, Some("15-20 reps")),
    planned("Kettlebell swing", 5, Some("20 reps")),
    planned("Farmer carry", 3, Some("40 meters")),
];

pub fn planned_for(day: DayKey) -> &'static [PlannedExercise] {
    match day {
        DayKey::Sunday => SUNDAY,
        DayKey::Monday => MONDAY,
        DayKey::Tuesday => TUESDAY,
        DayKey::Wednesday => WEDNESDAY,
        DayKey::Thursday => THURSDAY,
        DayKey::Friday => FRIDAY,
        DayKey::Saturday => SATURDAY,
    }
}

pub fn default_week() -> Week {
    let mut week = Week::new();
    for day in DayKey::ALL {
        let entries = planned_for(day)
            .iter()
            .map(|planned| {
                ExerciseEntry::new(
                    planned.name,
                    planned.sets,
                    planned.description.map(str::to_string),
                )
            })
            .collect();
        week.set_day(day, entries);
    }
    week
}
