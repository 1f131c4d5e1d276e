//! Industry solutions marketing page.

use leptos::prelude::*;

use crate::components::site_nav::{SiteFooter, SiteNav};

struct Solution {
    title: &'static str,
    desc: &'static str,
    features: [&'static str; 3],
}

const SOLUTIONS: &[Solution] = &[
    Solution {
        title: "Real Estate",
        desc: "Qualify leads, schedule viewings, and answer property questions instantly. \
               Never miss a potential buyer.",
        features: ["24/7 Inquiry Handling", "MLS Integration", "Automated Follow-ups"],
    },
    Solution {
        title: "Healthcare",
        desc: "Handle patient appointments, prescription refill requests, and general FAQs \
               with HIPAA-compliant AI agents.",
        features: ["Secure Patient Data", "EMR Integration", "Appointment Reminders"],
    },
    Solution {
        title: "E-Commerce",
        desc: "Support customers with order tracking, returns, and product recommendations \
               via chat and email.",
        features: [
            "Order Status Lookup",
            "Shopify/WooCommerce Sync",
            "Personalized Support",
        ],
    },
];

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <div class="marketing-page">
            <SiteNav/>

            <main class="marketing-main">
                <section class="page-hero">
                    <h1 class="page-hero__title">
                        "SOLUTIONS FOR" <br/>
                        <span class="page-hero__accent">"EVERY INDUSTRY."</span>
                    </h1>
                    <p class="page-hero__subtitle">
                        "Tailored AI workflows optimize for specific business needs, from \
                         high-volume call centers to boutique agencies."
                    </p>
                </section>

                <section class="solution-list">
                    {SOLUTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="solution-row">
                                    <h3 class="solution-row__title">{s.title}</h3>
                                    <p class="solution-row__desc">{s.desc}</p>
                                    <ul class="solution-row__features">
                                        {s.features
                                            .iter()
                                            .map(|f| view! { <li>{*f}</li> })
                                            .collect_view()}
                                    </ul>
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
