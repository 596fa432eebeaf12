use leptos::prelude::*;

use crate::models::NoteState;

/// Makes a fresh [`NoteState`] available to everything rendered inside.
#[component]
pub fn NoteStateProvider(children: Children) -> impl IntoView {
    provide_context(NoteState::new());

    children()
}
