//! The live tracking session: one week of exercises, the active day, edit
//! mode, both timers and the open dialog.
//!
//! Every mutating operation leaves the in-memory week and the store in
//! agreement before it returns: the affected day's snapshot is rewritten as a
//! whole after each change, and structural edits rewrite the layout too.

use crate::day::DayKey;
use crate::editor::{Confirm, Editor};
use crate::errors::SessionError;
use crate::modal::{FocusMove, ModalKind, ModalState};
use crate::models::{
    DaySnapshot, DayView, ExerciseEntry, SessionView, SetRef, TimersView, ToggleSetResponse,
    Week, WeekSummary,
};
use crate::progress;
use crate::storage::{KeyValueStore, LocalStore};
use crate::timer::{RestTick, RestTimer, Stopwatch, Ticker};
use crate::tracking;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Stopwatch,
    Rest,
}

#[derive(Debug)]
pub struct Session<S = LocalStore> {
    store: S,
    week: Week,
    active_day: DayKey,
    editor: Editor,
    stopwatch: Stopwatch,
    rest: RestTimer,
    stopwatch_ticker: Option<Ticker>,
    rest_ticker: Option<Ticker>,
    modal: ModalState,
}

impl<S: KeyValueStore> Session<S> {
    /// Builds the session from `program`, replacing any day whose layout was
    /// saved, restores saved progress and activates `today`.
    pub fn start(store: S, program: Week, today: DayKey, rest_seconds: u32) -> Self {
        let mut week = program;
        for day in DayKey::ALL {
            if let Some(entries) = tracking::load_layout(&store, day) {
                week.set_day(day, entries);
            }
        }

        let mut session = Self {
            store,
            week,
            active_day: today,
            editor: Editor::default(),
            stopwatch: Stopwatch::default(),
            rest: RestTimer::new(rest_seconds),
            stopwatch_ticker: None,
            rest_ticker: None,
            modal: ModalState::default(),
        };
        session.load_progress();
        info!("session started on {today}");
        session
    }

    pub fn load_progress(&mut self) {
        for day in DayKey::ALL {
            let Some(snapshot) = tracking::load(&self.store, day) else {
                continue;
            };
            if !snapshot.apply(self.week.day_mut(day)) {
                warn!("saved progress for {day} does not match its exercise list; applied by position");
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn week(&self) -> &Week {
        &self.week
    }

    pub fn active_day(&self) -> DayKey {
        self.active_day
    }

    pub fn select_day(&mut self, day: DayKey) -> DayView {
        self.active_day = day;
        self.day_view(day)
    }

    pub fn day_view(&self, day: DayKey) -> DayView {
        progress::day_view(day, self.week.day(day), day == self.active_day)
    }

    pub fn summary(&self) -> WeekSummary {
        progress::week_summary(&self.week, self.stopwatch.elapsed_seconds())
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            active_day: self.active_day,
            edit_mode: self.editor.edit_mode(),
            days: DayKey::ALL.iter().map(|day| self.day_view(*day)).collect(),
            timers: self.timers(),
            modal: self.modal.current(),
        }
    }

    /// When a set gets checked, the next checkbox of the day in document
    /// order is returned as the focus target.
    pub fn toggle_set(
        &mut self,
        day: DayKey,
        exercise: usize,
        set: usize,
        checked: bool,
    ) -> Result<ToggleSetResponse, SessionError> {
        let entries = self.week.day_mut(day);
        let entry = entries
            .get_mut(exercise)
            .ok_or(SessionError::UnknownExercise { day, exercise })?;
        let flag = entry
            .sets
            .get_mut(set)
            .ok_or(SessionError::UnknownSet { day, exercise, set })?;
        *flag = checked;

        let next_focus = if checked {
            next_set(entries, exercise, set).map(|(exercise, set)| SetRef { day, exercise, set })
        } else {
            None
        };

        self.save_day(day);
        Ok(ToggleSetResponse {
            day: self.day_view(day),
            next_focus,
        })
    }

    pub fn set_note(
        &mut self,
        day: DayKey,
        exercise: usize,
        note: String,
    ) -> Result<DayView, SessionError> {
        let entry = self
            .week
            .day_mut(day)
            .get_mut(exercise)
            .ok_or(SessionError::UnknownExercise { day, exercise })?;
        entry.note = note;

        self.save_day(day);
        Ok(self.day_view(day))
    }

    pub fn edit_mode(&self) -> bool {
        self.editor.edit_mode()
    }

    pub fn set_edit_mode(&mut self, enabled: bool) -> bool {
        self.editor.set_edit_mode(enabled);
        enabled
    }

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.editor.toggle_edit_mode()
    }

    pub fn add_exercise(
        &mut self,
        day: DayKey,
        name: &str,
        set_count: usize,
        description: Option<&str>,
    ) -> Result<DayView, SessionError> {
        self.editor
            .add_exercise(self.week.day_mut(day), name, set_count, description)?;

        self.save_structure(day);
        Ok(self.day_view(day))
    }

    pub fn remove_exercise(
        &mut self,
        day: DayKey,
        index: usize,
        confirm: &dyn Confirm,
    ) -> Result<DayView, SessionError> {
        self.editor
            .remove_exercise(self.week.day_mut(day), index, confirm)?;

        self.save_structure(day);
        Ok(self.day_view(day))
    }

    /// Clears every flag, every note and every saved snapshot of the week.
    pub fn reset_tracking(&mut self) -> WeekSummary {
        for day in DayKey::ALL {
            for entry in self.week.day_mut(day).iter_mut() {
                entry.sets.iter_mut().for_each(|flag| *flag = false);
                entry.note.clear();
            }
            tracking::clear(&mut self.store, day);
        }
        info!("tracking reset for the whole week");
        self.summary()
    }

    pub fn timers(&self) -> TimersView {
        TimersView {
            stopwatch: self.stopwatch.view(),
            rest: self.rest.view(),
        }
    }

    /// Returns whether the stopwatch is now running.
    pub fn toggle_stopwatch(&mut self) -> bool {
        let running = self.stopwatch.toggle();
        if !running {
            self.stopwatch_ticker = None;
        }
        running
    }

    pub fn reset_stopwatch(&mut self) {
        self.stopwatch_ticker = None;
        self.stopwatch.reset();
    }

    pub fn tick_stopwatch(&mut self) -> bool {
        let running = self.stopwatch.tick();
        if !running {
            self.stopwatch_ticker = None;
        }
        debug!(elapsed = self.stopwatch.elapsed_seconds(), "stopwatch tick");
        running
    }

    /// Returns `false` when the rest timer was already running.
    pub fn start_rest(&mut self) -> bool {
        self.rest.start()
    }

    pub fn stop_rest(&mut self) {
        self.rest_ticker = None;
        self.rest.stop();
    }

    pub fn reset_rest(&mut self) {
        self.rest_ticker = None;
        self.rest.reset();
    }

    pub fn tick_rest(&mut self) -> RestTick {
        let tick = self.rest.tick();
        match tick {
            RestTick::Running => debug!(remaining = self.rest.remaining_seconds(), "rest tick"),
            RestTick::Completed => {
                self.rest_ticker = None;
                info!("rest timer completed");
            }
            RestTick::Idle => self.rest_ticker = None,
        }
        tick
    }

    /// Hands the periodic driver of a running timer to the session. A ticker
    /// for a timer that is not running is dropped immediately.
    pub fn attach_ticker(&mut self, kind: TimerKind, ticker: Ticker) {
        match kind {
            TimerKind::Stopwatch if self.stopwatch.is_running() => {
                self.stopwatch_ticker = Some(ticker)
            }
            TimerKind::Rest if self.rest.is_running() => self.rest_ticker = Some(ticker),
            _ => drop(ticker),
        }
    }

    #[cfg(test)]
    fn has_ticker(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Stopwatch => self.stopwatch_ticker.is_some(),
            TimerKind::Rest => self.rest_ticker.is_some(),
        }
    }

    pub fn open_modal(&mut self, kind: ModalKind, return_focus: String, focusables: Vec<String>) {
        self.modal.open(kind, return_focus, focusables);
    }

    pub fn close_modal(&mut self) -> Option<String> {
        self.modal.close()
    }

    pub fn move_modal_focus(&mut self, direction: FocusMove) -> Option<String> {
        self.modal.move_focus(direction).map(str::to_string)
    }

    fn save_day(&mut self, day: DayKey) {
        let snapshot = DaySnapshot::capture(self.week.day(day));
        tracking::save(&mut self.store, day, &snapshot);
    }

    fn save_structure(&mut self, day: DayKey) {
        tracking::save_layout(&mut self.store, day, self.week.day(day));
        self.save_day(day);
    }
}

fn next_set(entries: &[ExerciseEntry], exercise: usize, set: usize) -> Option<(usize, usize)> {
    if set + 1 < entries.get(exercise)?.sets.len() {
        return Some((exercise, set + 1));
    }
    entries
        .iter()
        .enumerate()
        .skip(exercise + 1)
        .find(|(_, entry)| !entry.sets.is_empty())
        .map(|(index, _)| (index, 0))
}
