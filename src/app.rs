//! Application root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the session signal to the whole tree, kicks off the startup
//! restore, and declares the route table: public marketing routes, the
//! guest-only auth route, the public onboarding wizard, and the
//! protected `/app` subtree rendered inside the sidebar shell.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes};

use crate::components::app_layout::AppLayout;
use crate::components::route_guard::{GuestOnly, Protected};
use crate::pages;
use crate::state::auth::AuthState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(crate::state::session::restore(auth));
    #[cfg(not(feature = "csr"))]
    auth.set(AuthState::anonymous());

    view! {
        <Stylesheet id="mesa" href="/styles.css"/>
        <Title text="Mesa AI"/>

        <Router>
            <Routes fallback=|| view! { <pages::landing::LandingPage/> }>
                <Route path=StaticSegment("") view=pages::landing::LandingPage/>
                <Route path=StaticSegment("capabilities") view=pages::capabilities::CapabilitiesPage/>
                <Route path=StaticSegment("solutions") view=pages::solutions::SolutionsPage/>
                <Route path=StaticSegment("pricing") view=pages::pricing::PricingPage/>
                <Route path=StaticSegment("auth") view=GuestAuth/>
                // Reachable pre-login: signup does not authenticate, and
                // new accounts land here before their first session.
                <Route path=StaticSegment("onboarding") view=pages::onboarding::OnboardingPage/>
                <ParentRoute path=StaticSegment("app") view=ProtectedShell>
                    <Route path=StaticSegment("") view=pages::dashboard::DashboardPage/>
                    <Route path=StaticSegment("agents") view=pages::agents::AgentsPage/>
                    <Route path=StaticSegment("inbox") view=pages::inbox::InboxPage/>
                    <Route path=StaticSegment("leads") view=pages::leads::LeadsPage/>
                    <Route path=StaticSegment("integrations") view=pages::integrations::IntegrationsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn GuestAuth() -> impl IntoView {
    view! {
        <GuestOnly>
            <pages::auth::AuthPage/>
        </GuestOnly>
    }
}

#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <Protected>
            <AppLayout/>
        </Protected>
    }
}
