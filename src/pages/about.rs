use leptos::prelude::*;

/// Static description of the application. Takes no capabilities.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="page about">
            <h2>"About Notebox"</h2>
            <p>
                "Notebox keeps short notes at hand while you browse. Notes live for the "
                "current session and are shared across every page."
            </p>
            <p>"Use Add Note to create one and Home to review or remove them."</p>
        </section>
    }
}
