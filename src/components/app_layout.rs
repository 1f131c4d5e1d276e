//! Chrome for the authenticated area.
//!
//! Fixed sidebar with section navigation and the workspace box, content
//! rendered through the router outlet. Sign out is synchronous and only
//! local: tokens are purged and the visitor lands back on the marketing
//! site.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::state::auth::AuthState;
use crate::state::session;

#[component]
pub fn AppLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let org_name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .and_then(|u| u.organizations.as_ref().map(|o| o.name.clone()))
                .unwrap_or_else(|| "Workspace".to_owned())
        })
    };
    let email = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|u| u.email.clone())
                .unwrap_or_default()
        })
    };

    let sign_out = move |_| {
        session::logout(auth);
        navigate("/", Default::default());
    };

    view! {
        <div class="app-shell">
            <aside class="app-sidebar">
                <div class="app-sidebar__brand">
                    <Logo/>
                </div>
                <nav class="app-sidebar__nav">
                    <A href="/app" exact=true attr:class="app-sidebar__link">"Dashboard"</A>
                    <A href="/app/agents" attr:class="app-sidebar__link">"Agents"</A>
                    <A href="/app/inbox" attr:class="app-sidebar__link">"Inbox"</A>
                    <A href="/app/leads" attr:class="app-sidebar__link">"Leads"</A>
                    <A href="/app/integrations" attr:class="app-sidebar__link">"Integrations"</A>
                </nav>
                <div class="app-sidebar__workspace">
                    <div class="workspace-box">
                        <span class="workspace-box__name">{org_name}</span>
                        <span class="workspace-box__plan">"Free Plan"</span>
                    </div>
                    <div class="app-sidebar__account">
                        <span class="app-sidebar__email">{email}</span>
                        <button class="btn btn--ghost" on:click=sign_out>
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </aside>
            <main class="app-content">
                <Outlet/>
            </main>
        </div>
    }
}
