use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::models::{AlertKind, ShowAlert};
use crate::pages::validation::validate_login;

/// Sign-in form. Credentials are checked for shape only.
#[component]
pub fn Login(show_alert: ShowAlert) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let address = email.get();
        match validate_login(&address, &password.get()) {
            Ok(()) => {
                password.set(String::new());
                show_alert.show(format!("Signing in as {}", address.trim()), AlertKind::Info);
            }
            Err(_) => {
                show_alert.show("Invalid credentials", AlertKind::Danger);
            }
        }
    };

    view! {
        <section class="page login">
            <h2>"Login"</h2>
            <form on:submit=on_submit>
                <label for="login-email">"Email address"</label>
                <input
                    type="email"
                    id="login-email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="login-password">"Password"</label>
                <input
                    type="password"
                    id="login-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"Login"</button>
            </form>
        </section>
    }
}
