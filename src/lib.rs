//! # peopledesk-client
//!
//! Leptos + WASM frontend for the PeopleDesk HR application.
//!
//! The heart of this crate is the session layer: `state::session` owns the
//! authenticated identity and persists it across page reloads via browser
//! `localStorage`, and `components::access_guard` gates protected routes on
//! the signed-in user's role. Pages, the REST helpers, and the top bar are
//! thin consumers of those two modules.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
