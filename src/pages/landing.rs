//! Marketing landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::site_nav::{SiteFooter, SiteNav};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="marketing-page">
            <SiteNav/>

            <section class="hero">
                <div class="hero__copy">
                    <h1 class="hero__title">
                        "YOUR" <br/> "WORKFORCE" <br/>
                        <span class="hero__accent">"REIMAGINED."</span>
                    </h1>
                    <p class="hero__subtitle">
                        "Deploy intelligent AI agents that handle calls, bookings, and \
                         customer support 24/7. Seamlessly integrated into your business."
                    </p>
                    <div class="hero__actions">
                        <A href="/auth" attr:class="btn btn--primary btn--lg">
                            "Deploy Your First Agent"
                        </A>
                        <button class="btn btn--outline btn--lg">"View Demo"</button>
                    </div>
                </div>
                <ConversationPreview/>
            </section>

            <section class="feature-strip">
                <FeatureCell
                    title="Global Reach"
                    desc="Agents that speak 30+ languages fluently."
                />
                <FeatureCell
                    title="Instant Scale"
                    desc="Handle 1 or 1,000 concurrent calls effortlessly."
                />
                <FeatureCell
                    title="Enterprise Secure"
                    desc="Bank-grade encryption for all client data."
                />
            </section>

            <SiteFooter/>
        </div>
    }
}

/// Static transcript mockup shown beside the hero copy.
#[component]
fn ConversationPreview() -> impl IntoView {
    view! {
        <div class="hero__preview">
            <div class="preview-window">
                <div class="preview-window__chrome">
                    <span class="preview-window__dot"></span>
                    <span class="preview-window__dot"></span>
                    <span class="preview-window__dot"></span>
                    <span class="preview-window__file">"active_session_442.log"</span>
                </div>
                <div class="preview-window__body">
                    <PreviewLine
                        speaker="Amara (Receptionist)"
                        text="Hello! Thanks for calling Tech Corp. This is Amara. How can I \
                              assist you with your booking today?"
                        agent=true
                    />
                    <PreviewLine
                        speaker="User"
                        text="Hi Amara, I need to reschedule my appointment from Tuesday to \
                              Thursday afternoon."
                        agent=false
                    />
                    <PreviewLine
                        speaker="Amara (Receptionist)"
                        text="I have openings at 2:00 PM and 4:30 PM on Thursday. Which works \
                              best for you?"
                        agent=true
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn PreviewLine(speaker: &'static str, text: &'static str, agent: bool) -> impl IntoView {
    let class = if agent {
        "preview-line preview-line--agent"
    } else {
        "preview-line preview-line--user"
    };
    view! {
        <div class=class>
            <div class="preview-line__speaker">{speaker}</div>
            <div class="preview-line__bubble">{text}</div>
        </div>
    }
}

#[component]
fn FeatureCell(title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="feature-cell">
            <h3 class="feature-cell__title">{title}</h3>
            <p class="feature-cell__desc">{desc}</p>
        </div>
    }
}
