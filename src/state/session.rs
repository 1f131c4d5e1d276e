//! Session operations: startup restore, login, signup, logout.
//!
//! DESIGN
//! ======
//! Operations mutate the shared `RwSignal<AuthState>` and the token store
//! together so the two never disagree for longer than one in-flight
//! request. The restore decision and probe resolution are pure functions;
//! the async wrappers only sequence them around the network call.
//!
//! ERROR HANDLING
//! ==============
//! Restore failures degrade silently to an anonymous session and purge
//! both stored tokens; they are never surfaced to the user. Login and
//! signup propagate their error so forms can render the message inline.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{SignupResponse, User};
use crate::state::auth::AuthState;
use crate::util::token_store;

/// Startup decision: whether the stored token warrants a profile probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestorePlan {
    /// No stored token: resolve anonymous without any network call.
    SkipProbe,
    /// Token present: ask the API who it belongs to.
    Probe,
}

/// Plan the startup restore from the stored access token.
pub fn restore_plan(token: Option<&str>) -> RestorePlan {
    match token {
        Some(token) if !token.is_empty() => RestorePlan::Probe,
        _ => RestorePlan::SkipProbe,
    }
}

/// Resolve a finished probe into the settled state plus whether the
/// stored tokens must be purged.
pub fn resolve_probe(result: Result<User, ApiError>) -> (AuthState, bool) {
    match result {
        Ok(user) => (AuthState::authenticated(user), false),
        Err(_) => (AuthState::anonymous(), true),
    }
}

/// Restore the session on startup. Always settles the loading flag,
/// success or failure, before any guard can redirect.
pub async fn restore(auth: RwSignal<AuthState>) {
    match restore_plan(token_store::access_token().as_deref()) {
        RestorePlan::SkipProbe => auth.set(AuthState::anonymous()),
        RestorePlan::Probe => {
            let (state, purge) = resolve_probe(api::fetch_me().await);
            if purge {
                token_store::clear_tokens();
            }
            auth.set(state);
        }
    }
}

/// Log in with credentials: persist the issued token pair, then fetch the
/// full profile. If the profile fetch fails after the tokens were stored,
/// the pair is rolled back so the session never holds tokens it cannot
/// vouch for.
///
/// # Errors
///
/// Propagates the login or profile-fetch [`ApiError`]; the session stays
/// anonymous in both cases.
pub async fn login(
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let issued = api::login(email, password).await?;
    token_store::store_tokens(&issued.access_token, &issued.refresh_token);
    match api::fetch_me().await {
        Ok(user) => {
            auth.set(AuthState::authenticated(user));
            Ok(())
        }
        Err(err) => {
            token_store::clear_tokens();
            Err(err)
        }
    }
}

/// Create an account and organization. Never mutates session state: the
/// returned `message` tells the user to confirm their email and log in.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the signup request.
pub async fn signup(
    email: &str,
    password: &str,
    organization_name: &str,
) -> Result<SignupResponse, ApiError> {
    api::signup(email, password, organization_name).await
}

/// Log out synchronously: clear both tokens and settle anonymous.
/// Idempotent; no server-side invalidation call is made.
pub fn logout(auth: RwSignal<AuthState>) {
    token_store::clear_tokens();
    auth.set(AuthState::anonymous());
}
