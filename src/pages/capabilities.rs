//! Capabilities marketing page.

use leptos::prelude::*;

use crate::components::site_nav::{SiteFooter, SiteNav};

struct Capability {
    title: &'static str,
    desc: &'static str,
}

const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Voice AI",
        desc: "Natural, human-like voice agents that can handle inbound/outbound calls, \
               screen leads, and book appointments in real-time.",
    },
    Capability {
        title: "Multi-Channel Chat",
        desc: "Unified inbox for WhatsApp, Email, Slack, and Webchat. Your agents respond \
               instantly across all platforms.",
    },
    Capability {
        title: "Autonomous Scheduling",
        desc: "Deep integration with Google Calendar and Calendly. Agents negotiate times \
               and book slots without human intervention.",
    },
    Capability {
        title: "30+ Languages",
        desc: "Break language barriers. Mesa agents automatically detect and switch \
               languages to converse fluently with your global customers.",
    },
    Capability {
        title: "Real-Time Analytics",
        desc: "Track sentiment, resolution times, and conversion rates. Get actionable \
               insights from every interaction.",
    },
    Capability {
        title: "CRM Sync",
        desc: "Automatically update your CRM (HubSpot, Salesforce) with lead details, \
               conversation summaries, and next steps.",
    },
];

#[component]
pub fn CapabilitiesPage() -> impl IntoView {
    view! {
        <div class="marketing-page">
            <SiteNav/>

            <main class="marketing-main">
                <section class="page-hero">
                    <h1 class="page-hero__title">
                        "BUILT FOR" <br/>
                        <span class="page-hero__accent">"SCALE."</span>
                    </h1>
                    <p class="page-hero__subtitle">
                        "Mesa provides a comprehensive suite of AI capabilities designed to \
                         handle complex business workflows autonomously."
                    </p>
                </section>

                <section class="capability-grid">
                    {CAPABILITIES
                        .iter()
                        .map(|c| {
                            view! {
                                <div class="capability-card">
                                    <h3 class="capability-card__title">{c.title}</h3>
                                    <p class="capability-card__desc">{c.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>
            </main>

            <SiteFooter/>
        </div>
    }
}
