use crate::models::{DayView, ExerciseView, SessionView};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Tabs are `tab-<day>`, panels `panel-<day>`. Inside a panel, checkboxes and
/// note fields appear in the same order the tracking snapshot flattens them.
pub fn render_index(view: &SessionView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Workout Tracker" }
            }
            body data-edit-mode=(flag(view.edit_mode)) data-active-day=(view.active_day.as_str()) {
                nav id="dayTabs" role="tablist" {
                    @for day in &view.days {
                        (render_tab(day))
                    }
                }
                main {
                    @for day in &view.days {
                        (render_panel(day, view.edit_mode))
                    }
                }
                div id="stopwatch" {
                    div id="timer" { (view.timers.stopwatch.display) }
                    button id="startStopBtn" { "Start / Stop" }
                    button id="resetBtn" { "Reset" }
                }
                div id="timerPanel" {
                    div id="timerDisplay" { (view.timers.rest.display) }
                    button id="restStart" disabled[!view.timers.rest.start_enabled] { "Start Rest" }
                    button id="restStop" disabled[!view.timers.rest.stop_enabled] { "Stop Rest" }
                    button id="restReset" disabled[!view.timers.rest.reset_enabled] { "Reset Rest" }
                }
                button id="showSummaryBtn" { "Show Summary" }
                button id="editModeBtn" { "Edit" }
                @if view.edit_mode {
                    button id="addExerciseBtn" { "Add Exercise" }
                }
                button id="resetTrackingBtn" { "Reset Tracking" }
                (summary_dialog())
                (add_exercise_dialog())
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn render_tab(day: &DayView) -> Markup {
    let tabindex = if day.active { "0" } else { "-1" };
    html! {
        button role="tab" id=(day.day.tab_id()) aria-controls=(day.day.panel_id())
            aria-selected=(flag(day.active)) tabindex=(tabindex) data-day=(day.day.as_str()) {
            (day.label)
            @if day.fully_completed { " ✓" }
        }
    }
}

fn render_panel(day: &DayView, edit_mode: bool) -> Markup {
    html! {
        section role="tabpanel" id=(day.day.panel_id()) aria-labelledby=(day.day.tab_id())
            data-day=(day.day.as_str()) hidden[!day.active] {
            ul {
                @for (exercise, entry) in day.exercises.iter().enumerate() {
                    (render_exercise(exercise, entry, edit_mode))
                }
            }
        }
    }
}

fn render_exercise(exercise: usize, entry: &ExerciseView, edit_mode: bool) -> Markup {
    html! {
        li {
            strong { (entry.name) }
            " "
            span.indicator { (entry.completed_sets) "/" (entry.total_sets) }
            @if edit_mode {
                button.remove-exercise data-exercise=(exercise) { "Remove" }
            }
            @if let Some(description) = &entry.description {
                p.description { (description) }
            }
            div.sets {
                @for (set, checked) in entry.sets.iter().enumerate() {
                    label {
                        input type="checkbox" data-exercise=(exercise) data-set=(set) checked[*checked];
                        " Set " (set + 1)
                    }
                }
            }
            div.exercise-notes-container {
                textarea data-exercise=(exercise) placeholder="Add notes (weight, form, etc.)..." {
                    (entry.note)
                }
            }
        }
    }
}

fn summary_dialog() -> Markup {
    html! {
        div id="workoutSummaryModal" role="dialog" aria-modal="true"
            aria-labelledby="workoutSummaryTitle" hidden {
            h2 id="workoutSummaryTitle" { "Workout Summary" }
            p id="summaryTotals" {}
            ul id="summaryList" {}
            button id="closeSummary" { "Close" }
        }
    }
}

fn add_exercise_dialog() -> Markup {
    html! {
        div id="addExerciseModal" role="dialog" aria-modal="true"
            aria-labelledby="addExerciseTitle" hidden {
            h2 id="addExerciseTitle" { "Add Exercise" }
            form id="addExerciseForm" {
                label for="exerciseName" { "Name" }
                input id="exerciseName" type="text" required;
                label for="exerciseSets" { "Sets" }
                input id="exerciseSets" type="number" min="1" max="10" value="3";
                label for="exerciseDescription" { "Description" }
                input id="exerciseDescription" type="text";
                button id="saveExercise" type="submit" { "Save" }
                button id="cancelExercise" type="button" { "Cancel" }
            }
        }
    }
}

const SCRIPT: &str = r#"
    const post = (url, body) => fetch(url, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body ?? {}),
    });
    const reload = () => window.location.reload();
    const activeDay = document.body.dataset.activeDay;

    document.querySelectorAll('#dayTabs [role="tab"]').forEach(tab => {
      tab.addEventListener("click", () => post(`/api/days/${tab.dataset.day}/select`).then(reload));
    });

    document.querySelectorAll('[role="tabpanel"]').forEach(panel => {
      const day = panel.dataset.day;
      panel.addEventListener("change", async (e) => {
        const target = e.target;
        if (target.type === "checkbox") {
          const res = await post(`/api/days/${day}/sets`, {
            exercise: Number(target.dataset.exercise),
            set: Number(target.dataset.set),
            checked: target.checked,
          });
          const body = await res.json();
          if (body.next_focus) {
            const next = panel.querySelector(
              `input[data-exercise="${body.next_focus.exercise}"][data-set="${body.next_focus.set}"]`);
            if (next) next.focus();
          }
        } else if (target.tagName === "TEXTAREA") {
          post(`/api/days/${day}/notes`, { exercise: Number(target.dataset.exercise), note: target.value });
        }
      });
      panel.querySelectorAll(".remove-exercise").forEach(btn => {
        btn.addEventListener("click", () => {
          const ok = window.confirm("Remove this exercise?");
          fetch(`/api/days/${day}/exercises/${btn.dataset.exercise}?confirm=${ok}`, { method: "DELETE" })
            .then(reload);
        });
      });
    });

    const openDialog = async (modal, dialogId, opener, focusables) => {
      await post("/api/modal/open", { modal, return_focus: opener, focusables });
      document.getElementById(dialogId).hidden = false;
      document.getElementById(focusables[0]).focus();
    };

    const closeDialog = async (dialogId) => {
      const body = await (await post("/api/modal/close")).json();
      document.getElementById(dialogId).hidden = true;
      if (body.restore_focus) {
        const target = document.getElementById(body.restore_focus);
        if (target) target.focus();
      }
    };

    document.querySelectorAll('[role="dialog"]').forEach(dialog => {
      dialog.addEventListener("keydown", async (e) => {
        if (e.key === "Escape") {
          e.preventDefault();
          closeDialog(dialog.id);
        } else if (e.key === "Tab") {
          e.preventDefault();
          const direction = e.shiftKey ? "previous" : "next";
          const body = await (await post("/api/modal/focus", { direction })).json();
          if (body.focused) document.getElementById(body.focused).focus();
        }
      });
    });

    document.getElementById("showSummaryBtn").addEventListener("click", async () => {
      const summary = await (await fetch("/api/summary")).json();
      document.getElementById("summaryTotals").textContent =
        `${summary.total_completed_sets}/${summary.total_sets} sets, ` +
        `${summary.completed_exercise_count}/${summary.total_exercise_count} exercises, ` +
        `time ${summary.elapsed_display}`;
      const list = document.getElementById("summaryList");
      list.replaceChildren(...summary.lines.map(line => {
        const item = document.createElement("li");
        item.textContent = `${line.label}: ${line.completed_sets}/${line.total_sets} sets`;
        return item;
      }));
      openDialog("summary", "workoutSummaryModal", "showSummaryBtn", ["closeSummary"]);
    });
    document.getElementById("closeSummary").addEventListener("click", () => closeDialog("workoutSummaryModal"));

    const addButton = document.getElementById("addExerciseBtn");
    if (addButton) {
      addButton.addEventListener("click", () => openDialog("add_exercise", "addExerciseModal", "addExerciseBtn",
        ["exerciseName", "exerciseSets", "exerciseDescription", "saveExercise", "cancelExercise"]));
    }
    document.getElementById("cancelExercise").addEventListener("click", () => closeDialog("addExerciseModal"));
    document.getElementById("addExerciseForm").addEventListener("submit", async (e) => {
      e.preventDefault();
      const name = document.getElementById("exerciseName");
      const description = document.getElementById("exerciseDescription").value;
      const res = await post(`/api/days/${activeDay}/exercises`, {
        name: name.value,
        sets: Number(document.getElementById("exerciseSets").value),
        description: description || null,
      });
      if (res.status === 400) {
        name.focus();
        return;
      }
      await closeDialog("addExerciseModal");
      reload();
    });

    const refreshTimers = async () => {
      const timers = await (await fetch("/api/timers")).json();
      document.getElementById("timer").textContent = timers.stopwatch.display;
      document.getElementById("timerDisplay").textContent = timers.rest.display;
      document.getElementById("restStart").disabled = !timers.rest.start_enabled;
      document.getElementById("restStop").disabled = !timers.rest.stop_enabled;
      document.getElementById("restReset").disabled = !timers.rest.reset_enabled;
    };
    setInterval(refreshTimers, 1000);
    refreshTimers();

    document.getElementById("startStopBtn").addEventListener("click", () => post("/api/stopwatch/toggle").then(refreshTimers));
    document.getElementById("resetBtn").addEventListener("click", () => post("/api/stopwatch/reset").then(refreshTimers));
    document.getElementById("restStart").addEventListener("click", () => post("/api/rest/start").then(refreshTimers));
    document.getElementById("restStop").addEventListener("click", () => post("/api/rest/stop").then(refreshTimers));
    document.getElementById("restReset").addEventListener("click", () => post("/api/rest/reset").then(refreshTimers));
    document.getElementById("editModeBtn").addEventListener("click", () => post("/api/edit-mode").then(reload));
    document.getElementById("resetTrackingBtn").addEventListener("click", () => post("/api/reset").then(reload));
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DayKey;
    use crate::models::{ExerciseEntry, TimersView};
    use crate::progress::day_view;
    use crate::timer::{RestTimer, Stopwatch};

    fn view_with(entry: ExerciseEntry, edit_mode: bool) -> SessionView {
        SessionView {
            active_day: DayKey::Monday,
            edit_mode,
            days: DayKey::ALL
                .iter()
                .map(|day| {
                    let entries = if *day == DayKey::Monday { vec![entry.clone()] } else { vec![] };
                    day_view(*day, &entries, *day == DayKey::Monday)
                })
                .collect(),
            timers: TimersView {
                stopwatch: Stopwatch::default().view(),
                rest: RestTimer::default().view(),
            },
            modal: None,
        }
    }

    #[test]
    fn renders_tabs_panels_and_escaped_notes() {
        let mut entry = ExerciseEntry::new("Squat", 2, None);
        entry.note = "<b>heavy</b>".to_string();
        entry.sets[0] = true;

        let html = render_index(&view_with(entry, false)).into_string();
        assert!(html.contains(r#"id="tab-monday""#));
        assert!(html.contains(r#"id="panel-sunday""#));
        assert!(html.contains(r#"data-exercise="0" data-set="0" checked"#));
        assert!(html.contains("&lt;b&gt;heavy&lt;/b&gt;"));
        assert!(!html.contains("<b>heavy"));
        assert!(!html.contains(r#"class="remove-exercise""#));
        assert!(!html.contains(r#"id="addExerciseBtn""#));
    }

    #[test]
    fn notes_with_braces_render_verbatim() {
        let mut entry = ExerciseEntry::new("Bench {{TABS}}", 1, None);
        entry.note = "remember {{REST}} and {{EDIT_MODE}}".to_string();

        let html = render_index(&view_with(entry, false)).into_string();
        assert!(html.contains("remember {{REST}} and {{EDIT_MODE}}</textarea>"));
        assert!(html.contains("<strong>Bench {{TABS}}</strong>"));
    }

    #[test]
    fn page_carries_summary_and_add_exercise_dialogs() {
        let entry = ExerciseEntry::new("Squat", 2, Some("Keep chest up".to_string()));

        let html = render_index(&view_with(entry, true)).into_string();
        assert!(html.contains(r#"id="showSummaryBtn""#));
        assert!(html.contains(r#"id="workoutSummaryModal" role="dialog" aria-modal="true""#));
        assert!(html.contains(r#"id="closeSummary""#));
        assert!(html.contains(r#"id="addExerciseBtn""#));
        assert!(html.contains(r#"id="addExerciseModal" role="dialog""#));
        assert!(html.contains(r#"id="exerciseSets" type="number" min="1" max="10""#));
        assert!(html.contains(r#"class="remove-exercise""#));
        assert!(html.contains(r#"<p class="description">Keep chest up</p>"#));
        assert!(html.contains(r#"data-active-day="monday""#));
    }
}
