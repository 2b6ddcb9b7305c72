//! To-Do Widget Frontend Entry Point

mod models;
mod theme;
mod config;
mod error;
mod repository;
mod tasks;
mod context;
mod store;
mod clock;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[APP] logger already initialised".into());
    }
    mount_to_body(App);
}
