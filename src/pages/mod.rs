//! Page components, one module per route.

pub mod agents;
pub mod auth;
pub mod capabilities;
pub mod dashboard;
pub mod inbox;
pub mod integrations;
pub mod landing;
pub mod leads;
pub mod onboarding;
pub mod pricing;
pub mod solutions;
