use leptos::prelude::*;

use crate::models::{next_note_id, Note};

/// Session-lifetime notes state shared with every routed page via
/// `use_context()`.
#[derive(Clone, Copy)]
pub struct NoteState {
    /// Notes created during this session
    pub notes: RwSignal<Vec<Note>>,
}

impl NoteState {
    pub fn new() -> Self {
        Self {
            notes: RwSignal::new(Vec::new()),
        }
    }

    /// Append a note and return its id
    pub fn add_note(&self, title: &str, description: &str, tag: &str) -> u64 {
        let mut id = 0;
        self.notes.update(|notes| {
            id = next_note_id(notes);
            notes.push(Note::new(id, title, description, tag));
        });
        id
    }

    /// Remove a note by id; returns false if it did not exist
    pub fn remove_note(&self, id: u64) -> bool {
        let mut removed = false;
        self.notes.update(|notes| {
            let before = notes.len();
            notes.retain(|n| n.id != id);
            removed = notes.len() != before;
        });
        removed
    }

    pub fn note_count(&self) -> usize {
        self.notes.with(Vec::len)
    }
}

impl Default for NoteState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_increasing_ids() {
        Owner::new().with(|| {
            let state = NoteState::new();
            assert_eq!(state.note_count(), 0);

            assert_eq!(state.add_note("Groceries", "milk and eggs", ""), 1);
            assert_eq!(state.add_note("Work", "finish report", "Office"), 2);
            assert_eq!(state.note_count(), 2);

            let notes = state.notes.get_untracked();
            assert_eq!(notes[0].tag, "General");
            assert_eq!(notes[1].tag, "Office");
        });
    }

    #[test]
    fn test_remove_reports_missing_note() {
        Owner::new().with(|| {
            let state = NoteState::new();
            let first = state.add_note("One", "first note", "");
            let second = state.add_note("Two", "second note", "");

            assert!(state.remove_note(first));
            assert!(!state.remove_note(first));
            assert_eq!(state.note_count(), 1);
            assert_eq!(state.notes.get_untracked()[0].id, second);

            // Ids continue past the largest remaining one
            assert_eq!(state.add_note("Three", "third note", ""), second + 1);
        });
    }
}
