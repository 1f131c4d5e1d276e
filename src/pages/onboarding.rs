//! Four-step setup wizard shown after signup.
//!
//! The wizard is presentational: role and channel picks steer copy only,
//! the real agent is configured later from the Agents page. Advancing
//! past the final step lands in the dashboard.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;

const STEP_TITLES: [&str; 4] = ["Welcome to Mesa", "Define Role", "Connect Channels", "Ready"];

/// Next wizard position, or `None` when the wizard is finished and the
/// caller should leave for the dashboard.
fn advance(step: usize) -> Option<usize> {
    if step + 1 < STEP_TITLES.len() { Some(step + 1) } else { None }
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let navigate = use_navigate();
    let step = RwSignal::new(0usize);

    let next = Callback::new(move |()| match advance(step.get_untracked()) {
        Some(n) => step.set(n),
        None => navigate("/app", Default::default()),
    });

    view! {
        <div class="onboarding">
            <header class="onboarding__header">
                <Logo/>
                <div class="onboarding__progress">
                    {(0..STEP_TITLES.len())
                        .map(|idx| {
                            view! {
                                <span class=move || {
                                    if idx <= step.get() {
                                        "onboarding__tick onboarding__tick--done"
                                    } else {
                                        "onboarding__tick"
                                    }
                                }></span>
                            }
                        })
                        .collect_view()}
                </div>
            </header>

            <main class="onboarding__body">
                {move || match step.get() {
                    0 => view! {
                        <div class="onboarding-step onboarding-step--centered">
                            <h1>"Let's build your first AI Agent."</h1>
                            <p>
                                "Mesa will help you automate your workflows. First, let's \
                                 get you set up."
                            </p>
                            <button
                                class="btn btn--primary btn--lg btn--block"
                                on:click=move |_| next.run(())
                            >
                                "Start Setup"
                            </button>
                        </div>
                    }
                    .into_any(),
                    1 => view! {
                        <div class="onboarding-step">
                            <h2>"What is this agent's primary role?"</h2>
                            <p>"This helps us tailor the system instructions."</p>
                            <div class="role-grid">
                                <RoleCard title="Receptionist" desc="Handle bookings & inquiries" on_pick=next/>
                                <RoleCard title="Support" desc="Tech support & updates" on_pick=next/>
                                <RoleCard title="Sales" desc="Lead qualification" on_pick=next/>
                                <RoleCard title="Custom" desc="Build from scratch" on_pick=next/>
                            </div>
                        </div>
                    }
                    .into_any(),
                    2 => view! {
                        <div class="onboarding-step">
                            <h2>"Connect Communication Channels"</h2>
                            <p>"Where should your agent be active?"</p>
                            <div class="channel-list">
                                <ChannelRow label="Voice Line"/>
                                <ChannelRow label="WhatsApp Business"/>
                                <ChannelRow label="Email Integration"/>
                            </div>
                            <button
                                class="btn btn--primary btn--lg btn--block"
                                on:click=move |_| next.run(())
                            >
                                "Continue"
                            </button>
                        </div>
                    }
                    .into_any(),
                    _ => view! {
                        <div class="onboarding-step onboarding-step--centered">
                            <div class="onboarding-step__check">"✓"</div>
                            <h2>"Ready to Deploy"</h2>
                            <p>"Your agent is initialized and ready for configuration."</p>
                            <button
                                class="btn btn--inverse btn--lg btn--block"
                                on:click=move |_| next.run(())
                            >
                                "Enter Dashboard"
                            </button>
                        </div>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn RoleCard(title: &'static str, desc: &'static str, on_pick: Callback<()>) -> impl IntoView {
    view! {
        <button class="role-card" on:click=move |_| on_pick.run(())>
            <h3 class="role-card__title">{title}</h3>
            <p class="role-card__desc">{desc}</p>
        </button>
    }
}

#[component]
fn ChannelRow(label: &'static str) -> impl IntoView {
    let active = RwSignal::new(false);
    view! {
        <div
            class=move || {
                if active.get() { "channel-row channel-row--active" } else { "channel-row" }
            }
            on:click=move |_| active.update(|a| *a = !*a)
        >
            <span class="channel-row__label">{label}</span>
            <span class="channel-row__mark">{move || if active.get() { "✓" } else { "" }}</span>
        </div>
    }
}
