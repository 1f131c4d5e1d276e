//! Wordmark used across marketing and app chrome.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <A href="/" attr:class="logo">
            "Mesa" <span class="logo__accent">"AI"</span>
        </A>
    }
}
