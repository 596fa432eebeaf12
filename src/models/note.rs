use serde::{Deserialize, Serialize};

/// Tag applied when the user leaves the field empty.
pub const DEFAULT_TAG: &str = "General";

/// A single note as held by the notes context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default = "default_tag")]
    pub tag: String,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

impl Note {
    pub fn new(id: u64, title: &str, description: &str, tag: &str) -> Self {
        let tag = tag.trim();
        Self {
            id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            tag: if tag.is_empty() {
                default_tag()
            } else {
                tag.to_string()
            },
        }
    }

    /// Generate a stable key for list rendering
    pub fn unique_key(&self) -> String {
        format!("note_{}", self.id)
    }
}

/// Next free id, one past the largest in use.
pub fn next_note_id(notes: &[Note]) -> u64 {
    notes.iter().map(|n| n.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_trims_and_defaults_tag() {
        let note = Note::new(3, "  Groceries ", " milk, eggs\n", "   ");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.description, "milk, eggs");
        assert_eq!(note.tag, DEFAULT_TAG);
        assert_eq!(note.unique_key(), "note_3");
    }

    #[test]
    fn test_next_note_id() {
        assert_eq!(next_note_id(&[]), 1);
        let notes = vec![Note::new(4, "a", "b", "x"), Note::new(2, "c", "d", "y")];
        assert_eq!(next_note_id(&notes), 5);
    }

    #[test]
    fn test_note_serialization() {
        let note = Note::new(1, "Title", "Body", "Work");
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"title\":\"Title\""));
        assert!(json.contains("\"tag\":\"Work\""));

        let deserialized: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, note);
    }

    #[test]
    fn test_missing_tag_deserializes_to_default() {
        let note: Note =
            serde_json::from_str(r#"{"id": 7, "title": "t", "description": "d"}"#).unwrap();
        assert_eq!(note.tag, DEFAULT_TAG);
    }
}
