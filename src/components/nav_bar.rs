use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::{Page, ROUTE_TABLE};

/// Persistent navigation chrome, identical on every route.
#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| Page::from_path(&location.pathname.get()));

    let links = ROUTE_TABLE
        .iter()
        .map(|&(path, page)| {
            view! {
                <li class="nav-item" class:active=move || current.get() == Some(page)>
                    <A href=path>{page.title()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <A href=Page::Home.path()>
                <span class="navbar-brand">"Notebox"</span>
            </A>
            <ul class="navbar-nav">{links}</ul>
        </nav>
    }
}
