use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    Summary,
    AddExercise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMove {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenModal {
    kind: ModalKind,
    return_focus: String,
    focusables: Vec<String>,
    focused: usize,
}

/// At most one open dialog. While open, focus is trapped inside the dialog's
/// focusable elements; closing hands back the element focused before opening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<OpenModal>,
}

impl ModalState {
    pub fn current(&self) -> Option<ModalKind> {
        self.open.as_ref().map(|modal| modal.kind)
    }

    /// Opening over an already open dialog keeps the first return target.
    pub fn open(&mut self, kind: ModalKind, return_focus: String, focusables: Vec<String>) {
        let return_focus = match self.open.take() {
            Some(previous) => previous.return_focus,
            None => return_focus,
        };
        self.open = Some(OpenModal {
            kind,
            return_focus,
            focusables,
            focused: 0,
        });
    }

    pub fn close(&mut self) -> Option<String> {
        self.open.take().map(|modal| modal.return_focus)
    }

    /// Tab / Shift+Tab inside the open dialog, wrapping at both ends.
    pub fn move_focus(&mut self, direction: FocusMove) -> Option<&str> {
        let modal = self.open.as_mut()?;
        let len = modal.focusables.len();
        if len == 0 {
            return None;
        }
        modal.focused = match direction {
            FocusMove::Next => (modal.focused + 1) % len,
            FocusMove::Previous => (modal.focused + len - 1) % len,
        };
        modal.focusables.get(modal.focused).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focusables() -> Vec<String> {
        vec!["exerciseName".into(), "exerciseSets".into(), "saveExercise".into()]
    }

    #[test]
    fn close_returns_focus_to_opener() {
        let mut modal = ModalState::default();
        modal.open(ModalKind::AddExercise, "addExerciseBtn".into(), focusables());
        assert_eq!(modal.current(), Some(ModalKind::AddExercise));
        assert_eq!(modal.move_focus(FocusMove::Next), Some("exerciseSets"));

        assert_eq!(modal.close().as_deref(), Some("addExerciseBtn"));
        assert_eq!(modal.current(), None);
        assert_eq!(modal.close(), None);
    }

    #[test]
    fn focus_wraps_inside_dialog() {
        let mut modal = ModalState::default();
        modal.open(ModalKind::AddExercise, "addExerciseBtn".into(), focusables());

        assert_eq!(modal.move_focus(FocusMove::Previous), Some("saveExercise"));
        assert_eq!(modal.move_focus(FocusMove::Next), Some("exerciseName"));
        assert_eq!(modal.move_focus(FocusMove::Next), Some("exerciseSets"));
    }

    #[test]
    fn reopening_keeps_original_return_target() {
        let mut modal = ModalState::default();
        modal.open(ModalKind::Summary, "showSummaryBtn".into(), vec![]);
        modal.open(ModalKind::AddExercise, "closeSummary".into(), focusables());
        assert_eq!(modal.move_focus(FocusMove::Next), Some("exerciseSets"));
        assert_eq!(modal.close().as_deref(), Some("showSummaryBtn"));
    }

    #[test]
    fn closed_dialog_has_no_focus_trap() {
        let mut modal = ModalState::default();
        assert_eq!(modal.move_focus(FocusMove::Next), None);
        modal.open(ModalKind::Summary, "showSummaryBtn".into(), vec![]);
        assert_eq!(modal.move_focus(FocusMove::Next), None);
    }
}
