//! Navigation bar and footer shared by the marketing pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::logo::Logo;

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <header class="site-nav">
            <Logo/>
            <nav class="site-nav__links">
                <A href="/capabilities">"Capabilities"</A>
                <A href="/solutions">"Solutions"</A>
                <A href="/pricing">"Pricing"</A>
            </nav>
            <div class="site-nav__actions">
                <A href="/auth" attr:class="btn btn--ghost">"Log In"</A>
                <A href="/auth" attr:class="btn btn--primary">"Get Started"</A>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <Logo/>
            <p class="site-footer__legal">"© 2025 Mesa AI Inc. All rights reserved."</p>
        </footer>
    }
}
