//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome shared across routes (navigation, the app
//! shell, guards) while reading session state from the Leptos context
//! provider.

pub mod app_layout;
pub mod error_banner;
pub mod logo;
pub mod route_guard;
pub mod site_nav;
