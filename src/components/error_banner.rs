//! Standard inline banner for failed list/detail loads.
//!
//! Every data page renders this on fetch failure instead of an empty or
//! perpetually loading state.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            {message}
        </div>
    }
}
