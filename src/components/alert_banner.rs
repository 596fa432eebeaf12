use leptos::prelude::*;

use crate::models::Alert;

/// Displays the current transient alert (non-modal).
///
/// Renders an empty region while no alert is active. Timing is owned by the
/// alert state; the banner only reflects it and offers a close button.
#[component]
pub fn AlertBanner(alert: Signal<Option<Alert>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="alert-region">
            {move || {
                alert
                    .get()
                    .map(|alert| {
                        view! {
                            <div class=alert.kind.css_class() role="alert">
                                <strong>{alert.kind.label()}</strong>
                                ": "
                                {alert.message}
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| on_dismiss.run(())
                                ></button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
