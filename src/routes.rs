use leptos::prelude::*;

use crate::models::ShowAlert;
use crate::pages::{About, AddNote, Home, Login, SignUp, TestPage};

/// Every routed page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Login,
    SignUp,
    Test,
    AddNote,
}

/// Static route table. Matching is exact: no prefixes, no trailing-slash
/// folding and no wildcard, so an unknown path matches nothing.
pub const ROUTE_TABLE: [(&str, Page); 6] = [
    ("/", Page::Home),
    ("/about", Page::About),
    ("/login", Page::Login),
    ("/signup", Page::SignUp),
    ("/test", Page::Test),
    ("/addnote", Page::AddNote),
];

impl Page {
    pub fn from_path(path: &str) -> Option<Self> {
        ROUTE_TABLE
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, page)| *page)
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Login => "/login",
            Self::SignUp => "/signup",
            Self::Test => "/test",
            Self::AddNote => "/addnote",
        }
    }

    /// Link text in the navigation bar
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
            Self::Test => "Test",
            Self::AddNote => "Add Note",
        }
    }

    /// Build the page. Every page except `About` is handed the alert
    /// capability.
    pub fn view(self, show_alert: ShowAlert) -> AnyView {
        match self {
            Self::Home => view! { <Home show_alert=show_alert /> }.into_any(),
            Self::About => view! { <About /> }.into_any(),
            Self::Login => view! { <Login show_alert=show_alert /> }.into_any(),
            Self::SignUp => view! { <SignUp show_alert=show_alert /> }.into_any(),
            Self::Test => view! { <TestPage show_alert=show_alert /> }.into_any(),
            Self::AddNote => view! { <AddNote show_alert=show_alert /> }.into_any(),
        }
    }
}
