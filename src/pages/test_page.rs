use leptos::prelude::*;

use crate::models::{AlertKind, ShowAlert};

/// Playground for exercising the alert banner by hand.
#[component]
pub fn TestPage(show_alert: ShowAlert) -> impl IntoView {
    let samples = [
        ("Saved successfully", AlertKind::Success),
        ("Something went wrong", AlertKind::Danger),
        ("Careful with that", AlertKind::Warning),
        ("Just so you know", AlertKind::Info),
        ("A custom category", AlertKind::from("custom")),
    ];

    let buttons = samples
        .into_iter()
        .map(|(message, kind)| {
            let label = kind.label();
            let class = format!("btn btn-{}", kind.as_str());
            view! {
                <button
                    type="button"
                    class=class
                    on:click=move |_| show_alert.show(message, kind.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="page test">
            <h2>"Alert test bench"</h2>
            <p>"Each button raises an alert. A newer alert always replaces the current one."</p>
            <div class="button-row">{buttons}</div>
        </section>
    }
}
