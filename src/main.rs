#![allow(warnings)]
//! Restaurant Page Frontend Entry Point

mod booking;
mod browser;
mod cart;
mod config;
mod error;
mod filter;
mod lightbox;
mod logger;
mod models;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::LOG_LEVEL);
    mount_to_body(App);
}
