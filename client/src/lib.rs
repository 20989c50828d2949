//! # thanqa-client
//!
//! Leptos + WASM front-end for the ThanQA test-management application.
//!
//! This crate contains the login flow, the route guard, the dashboard panels,
//! the REST client for the ThanQA API, and the browser helpers they share.
//! The `hydrate` feature builds the browser bundle; `ssr` lets the host
//! binary render the same views on the server.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
