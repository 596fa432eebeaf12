use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::models::{AlertKind, NoteState, ShowAlert};
use crate::pages::validation::validate_note;
use crate::routes::Page;

/// Form for adding a note to the session's notes.
#[component]
pub fn AddNote(show_alert: ShowAlert) -> impl IntoView {
    let notes = use_context::<NoteState>().expect("NoteState context missing");
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let tag = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = validate_note(&title.get(), &description.get()) {
            show_alert.show(e.to_string(), AlertKind::Danger);
            return;
        }

        notes.add_note(&title.get(), &description.get(), &tag.get());
        title.set(String::new());
        description.set(String::new());
        tag.set(String::new());

        show_alert.show("Note added successfully", AlertKind::Success);
        navigate(Page::Home.path(), NavigateOptions::default());
    };

    view! {
        <section class="page add-note">
            <h2>"Add a note"</h2>
            <form on:submit=on_submit>
                <label for="note-title">"Title"</label>
                <input
                    type="text"
                    id="note-title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <label for="note-description">"Description"</label>
                <textarea
                    id="note-description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <label for="note-tag">"Tag"</label>
                <input
                    type="text"
                    id="note-tag"
                    placeholder="General"
                    prop:value=move || tag.get()
                    on:input=move |ev| tag.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"Add Note"</button>
            </form>
        </section>
    }
}
