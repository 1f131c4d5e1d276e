//! Client-side session state.
//!
//! ARCHITECTURE
//! ============
//! `auth` holds the session value provided to the view tree via Leptos
//! context (explicit injected state, not a module-level singleton);
//! `session` owns the operations that move it between phases.

pub mod auth;
pub mod session;
