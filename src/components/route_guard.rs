//! Declarative route guards over session state.
//!
//! DESIGN
//! ======
//! The redirect decision is a pure predicate over `AuthState` so the
//! routing policy is testable without a browser. The two wrapper
//! components only apply the predicate: an effect performs the redirect
//! (replacing history so back-navigation cannot return to the gated
//! route) and the render closure picks children or a placeholder.
//!
//! Loading always takes precedence over either redirect decision; the
//! startup restore settles the flag before any guard acts.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Login route guests are sent to.
pub const AUTH_ROUTE: &str = "/auth";
/// Authenticated landing route.
pub const APP_ROUTE: &str = "/app";

/// What a guard should do for the current session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session unresolved: render a neutral placeholder, never redirect.
    Wait,
    /// Render the gated children.
    Allow,
    /// Send the visitor elsewhere, replacing history.
    Redirect(&'static str),
}

/// Outcome for authenticated-only routes.
pub fn protected_outcome(state: &AuthState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Wait
    } else if state.is_authenticated() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(AUTH_ROUTE)
    }
}

/// Outcome for guest-only routes (the auth page).
pub fn guest_outcome(state: &AuthState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Wait
    } else if state.is_authenticated() {
        GuardOutcome::Redirect(APP_ROUTE)
    } else {
        GuardOutcome::Allow
    }
}

fn install_redirect(outcome: fn(&AuthState) -> GuardOutcome) {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = outcome(&auth.get()) {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}

/// Renders children only for an authenticated session; anonymous
/// visitors are redirected to the login route. While the session is
/// unresolved a spinner placeholder holds the slot so the protected
/// view never flashes.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(protected_outcome);

    view! {
        {move || match protected_outcome(&auth.get()) {
            GuardOutcome::Allow => children(),
            _ => {
                view! {
                    <div class="guard-wait">
                        <div class="guard-wait__spinner"></div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

/// Renders children only for anonymous visitors; an authenticated
/// session is redirected into the app. Renders nothing while the
/// session is unresolved.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(guest_outcome);

    view! {
        {move || match guest_outcome(&auth.get()) {
            GuardOutcome::Allow => children(),
            _ => ().into_any(),
        }}
    }
}
