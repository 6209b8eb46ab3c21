use crate::models::ExerciseEntry;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("edit mode is not active")]
    EditModeInactive,

    #[error("exercise name must not be empty")]
    EmptyName,

    #[error("no exercise at position {0}")]
    NotFound(usize),

    #[error("removal of '{0}' was not confirmed")]
    Cancelled(String),
}

/// Caller-supplied confirmation for destructive edits.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Structural edits of one day's exercise list, gated by edit mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Editor {
    edit_mode: bool,
}

impl Editor {
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
    }

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        self.edit_mode
    }

    pub fn add_exercise<'a>(
        &self,
        entries: &'a mut Vec<ExerciseEntry>,
        name: &str,
        set_count: usize,
        description: Option<&str>,
    ) -> Result<&'a ExerciseEntry, EditError> {
        self.require_edit_mode()?;

        let name = name.trim();
        if name.is_empty() {
            return Err(EditError::EmptyName);
        }

        let description = description.map(|text| text.trim().to_string());
        entries.push(ExerciseEntry::new(name, set_count, description));
        info!("added exercise '{name}'");
        Ok(&entries[entries.len() - 1])
    }

    pub fn remove_exercise(
        &self,
        entries: &mut Vec<ExerciseEntry>,
        index: usize,
        confirm: &dyn Confirm,
    ) -> Result<ExerciseEntry, EditError> {
        self.require_edit_mode()?;

        let entry = entries.get(index).ok_or(EditError::NotFound(index))?;
        if !confirm.confirm(&format!("Remove exercise \"{}\"?", entry.name)) {
            return Err(EditError::Cancelled(entry.name.clone()));
        }

        let removed = entries.remove(index);
        info!("removed exercise '{}'", removed.name);
        Ok(removed)
    }

    fn require_edit_mode(&self) -> Result<(), EditError> {
        if self.edit_mode {
            Ok(())
        } else {
            Err(EditError::EditModeInactive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing() -> Editor {
        let mut editor = Editor::default();
        editor.set_edit_mode(true);
        editor
    }

    #[test]
    fn add_appends_unchecked_entry() {
        let mut entries = vec![ExerciseEntry::new("Squat", 3, None)];
        let added = editing()
            .add_exercise(&mut entries, "  Push-ups ", 3, Some(""))
            .unwrap()
            .clone();

        assert_eq!(added.name, "Push-ups");
        assert_eq!(added.sets, vec![false; 3]);
        assert_eq!(added.description, None);
        assert_eq!(added.note, "");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], added);
    }

    #[test]
    fn add_clamps_set_count() {
        let editor = editing();
        let mut entries = Vec::new();
        assert_eq!(editor.add_exercise(&mut entries, "A", 0, None).unwrap().sets.len(), 1);
        assert_eq!(editor.add_exercise(&mut entries, "B", 25, None).unwrap().sets.len(), 10);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut entries = Vec::new();
        assert_eq!(
            editing().add_exercise(&mut entries, "   ", 3, None).unwrap_err(),
            EditError::EmptyName
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn edits_require_edit_mode() {
        let editor = Editor::default();
        let mut entries = vec![ExerciseEntry::new("Plank", 1, None)];
        assert_eq!(
            editor.add_exercise(&mut entries, "Lunge", 2, None).unwrap_err(),
            EditError::EditModeInactive
        );
        assert_eq!(
            editor.remove_exercise(&mut entries, 0, &|_: &str| true).unwrap_err(),
            EditError::EditModeInactive
        );
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn remove_requires_confirmation() {
        let editor = editing();
        let mut entries = vec![ExerciseEntry::new("Plank", 1, None)];

        let err = editor.remove_exercise(&mut entries, 0, &|_: &str| false).unwrap_err();
        assert_eq!(err, EditError::Cancelled("Plank".to_string()));
        assert_eq!(entries.len(), 1);

        let removed = editor
            .remove_exercise(&mut entries, 0, &|prompt: &str| prompt.contains("Plank"))
            .unwrap();
        assert_eq!(removed.name, "Plank");
        assert!(entries.is_empty());
    }

    #[test]
    fn remove_out_of_range_is_not_found() {
        let editor = editing();
        let mut entries = Vec::new();
        assert_eq!(
            editor.remove_exercise(&mut entries, 4, &|_: &str| true).unwrap_err(),
            EditError::NotFound(4)
        );
    }

    #[test]
    fn toggling_edit_mode_flips_flag() {
        let mut editor = Editor::default();
        assert!(editor.toggle_edit_mode());
        editor.set_edit_mode(true);
        assert!(editor.edit_mode());
        assert!(!editor.toggle_edit_mode());
    }
}
