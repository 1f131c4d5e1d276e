//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read this to coordinate
//! redirects and identity-dependent rendering. Provided to the tree as an
//! `RwSignal<AuthState>` context; reading it outside the provider is a
//! programming error and fails fast via `expect_context`.
//!
//! The state machine has three phases: loading (startup probe in flight),
//! authenticated (profile present), anonymous. The loading flag starts
//! `true` and drops exactly once, when the startup restore settles.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Session phase: the current user, if any, and whether the startup
/// restore is still in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial phase while the startup probe runs.
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Settled phase with no session.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// Settled phase with an authenticated user.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// Whether a user profile is present. Derived, never stored.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}
