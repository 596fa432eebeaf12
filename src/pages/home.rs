use leptos::prelude::*;

use crate::models::{AlertKind, Note, NoteState, ShowAlert};

/// Lists the notes of the current session.
#[component]
pub fn Home(show_alert: ShowAlert) -> impl IntoView {
    let notes = use_context::<NoteState>().expect("NoteState context missing");

    let on_delete = Callback::new(move |id: u64| {
        if notes.remove_note(id) {
            show_alert.show("Note deleted", AlertKind::Success);
        } else {
            show_alert.show("Note no longer exists", AlertKind::Warning);
        }
    });

    view! {
        <section class="page home">
            <h2>"Your Notes"</h2>
            <p class="note-count">
                {move || match notes.note_count() {
                    0 => "No notes to display".to_string(),
                    1 => "1 note".to_string(),
                    n => format!("{n} notes"),
                }}
            </p>
            <div class="note-list">
                <For
                    each=move || notes.notes.get()
                    key=Note::unique_key
                    children=move |note| view! { <NoteCard note=note on_delete=on_delete /> }
                />
            </div>
        </section>
    }
}

#[component]
fn NoteCard(note: Note, on_delete: Callback<u64>) -> impl IntoView {
    let id = note.id;

    view! {
        <div class="note-card">
            <h5 class="note-title">{note.title}</h5>
            <span class="note-tag">{note.tag}</span>
            <p class="note-description">{note.description}</p>
            <button type="button" class="btn-delete" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
