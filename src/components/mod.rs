pub mod alert_banner;
pub mod nav_bar;
pub mod note_state_provider;

pub use alert_banner::AlertBanner;
pub use nav_bar::NavBar;
pub use note_state_provider::NoteStateProvider;
