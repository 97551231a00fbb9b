//! # inkpost
//!
//! Leptos + WASM front end for a blog-style CMS backed by an
//! Appwrite-compatible service: accounts and sessions, markdown posts keyed
//! by slug, and cover images in a storage bucket.
//!
//! The session-gated navigation core lives in `state`: a three-state session
//! store with explicit observers, a one-shot startup resolver, and the
//! route-gate state machine that `components::route_gate` binds to the
//! router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
