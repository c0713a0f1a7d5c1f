//! To-do Frontend Entry Point

mod actions;
mod api;
mod app;
mod busy;
mod components;
mod config;
mod context;
mod due_date;
mod error;
mod messages;
mod models;
mod pages;
mod routes;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!(api = AppConfig::from_env().api_base_url, "starting to-do frontend");
    mount_to_body(App);
}
