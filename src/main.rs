mod app;
mod components;
mod config;
mod error;
mod models;
mod pages;
mod routes;
mod timer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
