pub mod about;
pub mod add_note;
pub mod home;
pub mod login;
pub mod sign_up;
pub mod test_page;
pub mod validation;

pub use about::About;
pub use add_note::AddNote;
pub use home::Home;
pub use login::Login;
pub use sign_up::SignUp;
pub use test_page::TestPage;
