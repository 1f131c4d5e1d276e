//! Pricing marketing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::site_nav::{SiteFooter, SiteNav};

struct Plan {
    name: &'static str,
    price: &'static str,
    desc: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$49",
        desc: "Perfect for small businesses sending their first messages.",
        features: &["1 AI Agent", "500 Messages/mo", "Email Support", "Basic Analytics"],
        popular: false,
    },
    Plan {
        name: "Professional",
        price: "$149",
        desc: "For growing teams that need voice and multi-channel support.",
        features: &[
            "3 AI Agents",
            "5,000 Messages/mo",
            "Voice & WhatsApp",
            "Advanced Analytics",
            "Priority Support",
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        desc: "Unlimited scale for large organizations.",
        features: &[
            "Unlimited Agents",
            "Unlimited Messages",
            "SSO & Custom Integrations",
            "Dedicated Success Manager",
            "SLA Guarantee",
        ],
        popular: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="marketing-page">
            <SiteNav/>

            <main class="marketing-main">
                <section class="page-hero page-hero--centered">
                    <h1 class="page-hero__title">
                        "SIMPLE" <br/>
                        <span class="page-hero__accent">"PRICING."</span>
                    </h1>
                    <p class="page-hero__subtitle">
                        "Start small and scale as you grow. Transparent pricing with no \
                         hidden fees."
                    </p>
                </section>

                <section class="price-grid">
                    {PLANS.iter().map(price_card).collect_view()}
                </section>
            </main>

            <SiteFooter/>
        </div>
    }
}

fn price_card(plan: &'static Plan) -> impl IntoView {
    let card_class = if plan.popular {
        "price-card price-card--popular"
    } else {
        "price-card"
    };
    let cta = if plan.price == "Custom" { "Contact Sales" } else { "Get Started" };

    view! {
        <div class=card_class>
            <Show when=move || plan.popular>
                <span class="price-card__badge">"POPULAR"</span>
            </Show>
            <h3 class="price-card__name">{plan.name}</h3>
            <div class="price-card__price">
                <span class="price-card__amount">{plan.price}</span>
                <Show when=move || plan.price != "Custom">
                    <span class="price-card__period">"/month"</span>
                </Show>
            </div>
            <p class="price-card__desc">{plan.desc}</p>
            <ul class="price-card__features">
                {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            <A href="/auth" attr:class="btn btn--primary btn--block">{cta}</A>
        </div>
    }
}
