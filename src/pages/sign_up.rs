use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::models::{AlertKind, ShowAlert};
use crate::pages::validation::validate_sign_up;

/// Account creation form.
#[component]
pub fn SignUp(show_alert: ShowAlert) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = validate_sign_up(&name.get(), &email.get(), &password.get(), &confirm.get());
        match result {
            Ok(()) => {
                password.set(String::new());
                confirm.set(String::new());
                show_alert.show(
                    format!("Welcome, {}! Your details look good", name.get().trim()),
                    AlertKind::Success,
                );
            }
            Err(e) => show_alert.show(e.to_string(), AlertKind::Danger),
        }
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <section class="page signup">
            <h2>"Create an account"</h2>
            <form on:submit=on_submit>
                {field("signup-name", "Name", "text", name)}
                {field("signup-email", "Email address", "email", email)}
                {field("signup-password", "Password", "password", password)}
                {field("signup-confirm", "Confirm password", "password", confirm)}
                <button type="submit" class="btn-primary">"Sign Up"</button>
            </form>
        </section>
    }
}
