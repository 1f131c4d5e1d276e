//! # mesa-web
//!
//! Leptos + WASM front end for the Mesa AI workforce platform. Renders the
//! marketing site, the auth and onboarding flows, and the dashboard views
//! (agents, inbox, leads, integrations) on top of the Mesa REST API.
//!
//! All business logic (agent orchestration, conversation handling, lead
//! scoring) lives behind the API; this crate only shapes requests and
//! renders responses. Browser-only dependencies sit behind the `csr` cargo
//! feature so the logic layer compiles and tests on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Trunk invokes this on page load.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
