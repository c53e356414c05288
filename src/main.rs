//! MealDrop Frontend Entry Point

mod app;
mod components;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mealdrop-ui starting");
    mount_to_body(App);
}
