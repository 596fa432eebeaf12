pub mod alert;
pub mod alert_state;
pub mod note;
pub mod note_state;
pub mod notifier;

pub use alert::{Alert, AlertKind, AlertSlot, ClearPolicy};
pub use alert_state::{AlertState, ShowAlert};
pub use note::{next_note_id, Note};
pub use note_state::NoteState;
pub use notifier::Notifier;
