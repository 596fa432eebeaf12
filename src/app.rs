use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::{AlertBanner, NavBar, NoteStateProvider};
use crate::config::AppConfig;
use crate::models::{AlertState, ShowAlert};
use crate::routes::Page;

/// Root application component: notes context, navigation, alert banner and
/// the route table.
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // The only state owned at this level
    let alerts = AlertState::new(&config);
    let show_alert = alerts.show_alert();
    let on_dismiss = Callback::new(move |()| alerts.dismiss());

    view! {
        <NoteStateProvider>
            <Router>
                <NavBar />
                <AlertBanner alert=alerts.alert() on_dismiss=on_dismiss />
                <div class="container">
                    <RouteRegion show_alert=show_alert />
                </div>
            </Router>
        </NoteStateProvider>
    }
}

/// Renders the page whose path exactly equals the current location.
/// Unknown paths leave the region empty.
#[component]
fn RouteRegion(show_alert: ShowAlert) -> impl IntoView {
    let location = use_location();
    // Remount only when the matched page changes, not on every URL change
    let page = Memo::new(move |_| Page::from_path(&location.pathname.get()));

    move || page.get().map(|page| page.view(show_alert))
}
