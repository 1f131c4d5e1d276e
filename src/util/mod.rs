//! Browser-environment glue shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` concerns from page and component
//! logic so the rest of the crate stays host-testable.

pub mod token_store;
