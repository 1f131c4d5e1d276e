//! Dashboard overview.
//!
//! Three independent loads feed the page: the stats summary, the agent
//! roster, and the recent activity feed. Each renders its own error
//! banner on failure so one bad fetch never blanks the others.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_banner::ErrorBanner;
use crate::net::api_agents;
use crate::net::api_logs::{self, LogQuery};
use crate::net::types::{Agent, LogEntry};

const FEED_LIMIT: u32 = 10;

/// Feed line for a raw log action. Known actions get proper copy, the
/// rest fall back to the action name with underscores opened up.
fn humanize_action(action: &str) -> String {
    match action {
        "replied" => "Replied to a conversation".to_owned(),
        "book_appointment" => "Booked an appointment".to_owned(),
        "collect_lead" => "Captured a lead".to_owned(),
        "escalate_to_human" => "Escalated to a human".to_owned(),
        "rate_limited" => "Paused by rate limit".to_owned(),
        other => other.replace('_', " "),
    }
}

/// Agent name attached to a log row, or a placeholder for rows whose
/// agent has since been deleted.
fn feed_agent_name(entry: &LogEntry) -> &str {
    entry.agents.as_ref().map_or("Unknown agent", |a| a.name.as_str())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = LocalResource::new(api_logs::fetch_stats);
    let agents = LocalResource::new(api_agents::list_agents);
    let feed = LocalResource::new(|| async {
        let query = LogQuery {
            limit: Some(FEED_LIMIT),
            ..LogQuery::default()
        };
        api_logs::list_logs(&query).await
    });

    view! {
        <div class="page dashboard">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Dashboard"</h1>
                    <p class="page__subtitle">"Overview of your AI operations for today."</p>
                </div>
                <A href="/app/agents" attr:class="btn btn--primary">"+ New Agent"</A>
            </div>

            <Suspense fallback=|| view! { <div class="stat-grid stat-grid--loading"></div> }>
                {move || {
                    stats.get().map(|result| match result {
                        Ok(s) => view! {
                            <div class="stat-grid">
                                <StatCard title="Total Messages" value=s.messages_total/>
                                <StatCard title="Active Bookings" value=s.bookings_total/>
                                <StatCard title="Leads Captured" value=s.leads_total/>
                                <StatCard title="Active Agents" value=s.agents_active/>
                            </div>
                        }
                        .into_any(),
                        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>

            <div class="dashboard__columns">
                <section class="panel">
                    <div class="panel__header">
                        <h2 class="panel__title">"Active Agents"</h2>
                        <A href="/app/agents" attr:class="panel__more">"Manage"</A>
                    </div>
                    <Suspense fallback=|| view! { <p class="panel__empty">"Loading..."</p> }>
                        {move || {
                            agents.get().map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <p class="panel__empty">
                                            "No agents yet. Deploy your first one to get started."
                                        </p>
                                    }
                                    .into_any()
                                }
                                Ok(list) => list
                                    .into_iter()
                                    .map(|agent| view! { <AgentRow agent/> })
                                    .collect_view()
                                    .into_any(),
                                Err(err) => {
                                    view! { <ErrorBanner message=err.to_string()/> }.into_any()
                                }
                            })
                        }}
                    </Suspense>
                </section>

                <section class="panel">
                    <div class="panel__header">
                        <h2 class="panel__title">"Recent Activity"</h2>
                    </div>
                    <Suspense fallback=|| view! { <p class="panel__empty">"Loading..."</p> }>
                        {move || {
                            feed.get().map(|result| match result {
                                Ok(entries) if entries.is_empty() => {
                                    view! { <p class="panel__empty">"Nothing yet."</p> }.into_any()
                                }
                                Ok(entries) => entries
                                    .into_iter()
                                    .map(|entry| view! { <FeedItem entry/> })
                                    .collect_view()
                                    .into_any(),
                                Err(err) => {
                                    view! { <ErrorBanner message=err.to_string()/> }.into_any()
                                }
                            })
                        }}
                    </Suspense>
                </section>
            </div>
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}

#[component]
fn AgentRow(agent: Agent) -> impl IntoView {
    let initial = agent.name.chars().next().map(|c| c.to_uppercase().to_string());
    let role = agent
        .employee_types
        .as_ref()
        .map_or_else(|| "Agent".to_owned(), |t| t.name.clone());
    let status_class = if agent.status == "active" {
        "agent-row__status agent-row__status--active"
    } else {
        "agent-row__status agent-row__status--paused"
    };

    view! {
        <div class="agent-row">
            <span class="agent-row__avatar">{initial}</span>
            <div class="agent-row__ident">
                <span class="agent-row__name">{agent.name.clone()}</span>
                <span class="agent-row__role">{role}</span>
            </div>
            <span class=status_class>{agent.status.clone()}</span>
        </div>
    }
}

#[component]
fn FeedItem(entry: LogEntry) -> impl IntoView {
    let title = humanize_action(&entry.action);
    let who = feed_agent_name(&entry).to_owned();
    let when = entry.created_at.clone().unwrap_or_default();

    view! {
        <div class="feed-item">
            <div class="feed-item__body">
                <span class="feed-item__title">{title}</span>
                <span class="feed-item__who">{who}</span>
            </div>
            <span class="feed-item__time">{when}</span>
        </div>
    }
}
