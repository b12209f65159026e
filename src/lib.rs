//! # cah-client
//!
//! Leptos + WASM frontend for the party card game. Renders game lists and
//! lobbies, lets players create, join and start games, and shows the table
//! of played cards for the current round.
//!
//! The game server is authoritative: this crate only projects the session
//! snapshots it pushes and forwards player actions back over REST.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the first logger stays active.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating cah-client");
    leptos::mount::hydrate_body(app::App);
}
