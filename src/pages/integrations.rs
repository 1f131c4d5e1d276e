//! Integrations catalog.
//!
//! Connection state is cosmetic for now; real linking happens through
//! webhook configuration on the platform side, so the page leads with
//! the setup instructions and endpoint URLs.

use leptos::prelude::*;

const FACEBOOK_WEBHOOK: &str = "https://api.mesaai.com/api/webhooks/facebook";
const INSTAGRAM_WEBHOOK: &str = "https://api.mesaai.com/api/webhooks/instagram";

struct Integration {
    name: &'static str,
    description: &'static str,
    steps: &'static [&'static str],
}

const INTEGRATIONS: &[Integration] = &[
    Integration {
        name: "Facebook Messenger",
        description: "Connect your Facebook Page to receive messages",
        steps: &[
            "Go to Meta for Developers and create a new app",
            "Add the Messenger product to your app",
            "Generate a Page Access Token for your Facebook Page",
            "Set the webhook URL shown below",
            "Subscribe to `messages` webhook events",
        ],
    },
    Integration {
        name: "Instagram DMs",
        description: "Connect your Instagram Business account for DM handling",
        steps: &[
            "Ensure your Instagram account is a Business account",
            "Connect it to your Facebook Page",
            "In Meta for Developers, add the Instagram product",
            "Set the webhook URL shown below",
            "Subscribe to `messages` webhook events",
        ],
    },
    Integration {
        name: "Google Sheets",
        description: "Export leads automatically to Google Sheets",
        steps: &[
            "Authorize Google Sheets access",
            "Select the spreadsheet where leads should be exported",
            "New leads are appended automatically with name, contact, service, and score",
        ],
    },
];

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    view! {
        <div class="page integrations">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Integrations"</h1>
                    <p class="page__subtitle">"Connect your tools and platforms"</p>
                </div>
            </div>

            <div class="integration-grid">
                {INTEGRATIONS
                    .iter()
                    .map(|integration| {
                        view! {
                            <div class="integration-card">
                                <h3 class="integration-card__name">{integration.name}</h3>
                                <span class="badge">"Not Connected"</span>
                                <p class="integration-card__desc">{integration.description}</p>
                                <ol class="integration-card__steps">
                                    {integration
                                        .steps
                                        .iter()
                                        .map(|step| view! { <li>{*step}</li> })
                                        .collect_view()}
                                </ol>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="panel">
                <div class="panel__header">
                    <h2 class="panel__title">"Webhook Endpoints"</h2>
                </div>
                <p class="panel__note">
                    "Use these URLs when configuring webhooks in external platforms."
                </p>
                <div class="webhook-row">
                    <span class="webhook-row__name">"Facebook Messenger"</span>
                    <code class="webhook-row__url">{FACEBOOK_WEBHOOK}</code>
                </div>
                <div class="webhook-row">
                    <span class="webhook-row__name">"Instagram"</span>
                    <code class="webhook-row__url">{INSTAGRAM_WEBHOOK}</code>
                </div>
            </section>
        </div>
    }
}
