//! Tree & Board Demo Entry Point

mod app;
mod components;
mod context;
mod ids;
mod loader;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
