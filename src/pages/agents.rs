//! Agent roster and configuration.
//!
//! DESIGN
//! ======
//! One resource holds the roster; the deploy dialog and the slide-out
//! config panel both write through the API and then refetch it, so the
//! grid is always the server's view. The panel keeps the selected
//! agent's id rather than a snapshot and re-reads the agent from the
//! roster, so channel and status edits show up without extra fetches.

#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api_agents::{self, AgentUpdate};
use crate::net::api_employee_types;
use crate::net::types::{Agent, EmployeeType};

/// Channels an agent can be reached on, in display order.
const CHANNELS: [(&str, &str); 3] = [
    ("voice", "Voice Telephony"),
    ("whatsapp", "WhatsApp Business"),
    ("email", "Email Support"),
];

/// Status an activate/pause toggle moves the agent to.
fn next_status(current: &str) -> &'static str {
    if current == "active" { "paused" } else { "active" }
}

/// Whether the given channel is currently enabled on the agent.
fn channel_enabled(agent: &Agent, channel: &str) -> bool {
    agent
        .agent_channels
        .iter()
        .any(|c| c.channel == channel && c.is_enabled)
}

/// Display role for an agent card, falling back when the employee type
/// join is missing.
fn agent_role(agent: &Agent) -> String {
    agent
        .employee_types
        .as_ref()
        .map_or_else(|| "Agent".to_owned(), |t| t.name.clone())
}

/// Avatar letter for an agent name.
fn agent_initial(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().to_string())
}

#[component]
pub fn AgentsPage() -> impl IntoView {
    let agents = LocalResource::new(api_agents::list_agents);
    let selected_id = RwSignal::new(None::<String>);
    let deploying = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let selected_agent = Memo::new(move |_| {
        let id = selected_id.get()?;
        agents
            .get()
            .and_then(Result::ok)
            .and_then(|list| list.into_iter().find(|a| a.id == id))
    });

    view! {
        <div class="page agents">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Agents"</h1>
                    <p class="page__subtitle">
                        "Manage your AI workforce and their capabilities."
                    </p>
                </div>
                <button class="btn btn--primary" on:click=move |_| deploying.set(true)>
                    "+ Deploy New Agent"
                </button>
            </div>

            {move || error.get().map(|message| view! { <ErrorBanner message/> })}

            <Suspense fallback=|| view! { <p class="panel__empty">"Loading agents..."</p> }>
                {move || {
                    agents.get().map(|result| match result {
                        Ok(list) if list.is_empty() => view! {
                            <p class="panel__empty">
                                "No agents yet. Deploy your first one to get started."
                            </p>
                        }
                        .into_any(),
                        Ok(list) => view! {
                            <div class="agent-grid">
                                {list
                                    .into_iter()
                                    .map(|agent| {
                                        let id = agent.id.clone();
                                        view! {
                                            <AgentCard
                                                agent
                                                on_select=Callback::new(move |()| {
                                                    selected_id.set(Some(id.clone()));
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>

            {move || {
                selected_agent.get().map(|agent| view! {
                    <ConfigPanel
                        agent
                        agents
                        error
                        on_close=Callback::new(move |()| selected_id.set(None))
                    />
                })
            }}

            <Show when=move || deploying.get()>
                <DeployDialog
                    agents
                    error
                    on_close=Callback::new(move |()| deploying.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn AgentCard(agent: Agent, on_select: Callback<()>) -> impl IntoView {
    let role = agent_role(&agent);
    let initial = agent_initial(&agent.name);
    let badge_class = if agent.status == "active" {
        "badge badge--success"
    } else {
        "badge badge--warning"
    };
    let channels = agent
        .agent_channels
        .iter()
        .filter(|c| c.is_enabled)
        .map(|c| c.channel.clone())
        .collect::<Vec<_>>();

    view! {
        <div class="agent-card" on:click=move |_| on_select.run(())>
            <span class=badge_class>{agent.status.clone()}</span>
            <span class="agent-card__avatar">{initial}</span>
            <h3 class="agent-card__name">{agent.name.clone()}</h3>
            <p class="agent-card__role">{role}</p>
            <div class="agent-card__channels">
                {channels
                    .into_iter()
                    .map(|c| view! { <span class="chip">{c}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ConfigPanel(
    agent: Agent,
    agents: LocalResource<Result<Vec<Agent>, crate::net::error::ApiError>>,
    error: RwSignal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let prompt = RwSignal::new(agent.custom_system_prompt.clone().unwrap_or_default());
    let busy = RwSignal::new(false);

    let role = agent_role(&agent);
    let initial = agent_initial(&agent.name);
    let status = agent.status.clone();
    let agent_id = agent.id.clone();

    let toggle_status = {
        let id = agent_id.clone();
        let status = status.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let id = id.clone();
            let target = next_status(&status).to_owned();
            leptos::task::spawn_local(async move {
                let update = AgentUpdate {
                    status: Some(target),
                    ..AgentUpdate::default()
                };
                match api_agents::update_agent(&id, &update).await {
                    Ok(_) => agents.refetch(),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let save_prompt = {
        let id = agent_id.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let id = id.clone();
            let text = prompt.get_untracked();
            leptos::task::spawn_local(async move {
                let update = AgentUpdate {
                    custom_system_prompt: Some(text),
                    ..AgentUpdate::default()
                };
                match api_agents::update_agent(&id, &update).await {
                    Ok(_) => agents.refetch(),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let delete = {
        let id = agent_id.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match api_agents::delete_agent(&id).await {
                    Ok(_) => {
                        on_close.run(());
                        agents.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="panel-backdrop" on:click=move |_| on_close.run(())></div>
        <aside class="config-panel">
            <div class="config-panel__header">
                <h2>"Configure Agent"</h2>
                <button class="btn btn--ghost" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            <div class="config-panel__ident">
                <span class="config-panel__avatar">{initial}</span>
                <div>
                    <h3>{agent.name.clone()}</h3>
                    <p>{role}</p>
                </div>
            </div>

            <div class="config-panel__section">
                <label>"Status"</label>
                <div class="status-row">
                    <span class="status-row__value">{status.clone()}</span>
                    <button class="btn btn--outline" disabled=move || busy.get() on:click=toggle_status>
                        {if status == "active" { "Pause" } else { "Activate" }}
                    </button>
                </div>
            </div>

            <div class="config-panel__section">
                <label>"Active Channels"</label>
                {CHANNELS
                    .iter()
                    .map(|&(channel, label)| {
                        let enabled = channel_enabled(&agent, channel);
                        let id = agent_id.clone();
                        let toggle = move |_| {
                            if busy.get_untracked() {
                                return;
                            }
                            busy.set(true);
                            let id = id.clone();
                            leptos::task::spawn_local(async move {
                                match api_agents::update_agent_channel(&id, channel, !enabled)
                                    .await
                                {
                                    Ok(_) => agents.refetch(),
                                    Err(err) => error.set(Some(err.to_string())),
                                }
                                busy.set(false);
                            });
                        };
                        view! {
                            <div
                                class=if enabled {
                                    "channel-toggle channel-toggle--on"
                                } else {
                                    "channel-toggle"
                                }
                                on:click=toggle
                            >
                                <span>{label}</span>
                                <span class="channel-toggle__switch"></span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="config-panel__section">
                <label>"System Instructions"</label>
                <textarea
                    class="config-panel__prompt"
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="config-panel__actions">
                <button class="btn btn--primary" disabled=move || busy.get() on:click=save_prompt>
                    "Save Changes"
                </button>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=delete>
                    "Delete Agent"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn DeployDialog(
    agents: LocalResource<Result<Vec<Agent>, crate::net::error::ApiError>>,
    error: RwSignal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let employee_types = LocalResource::new(api_employee_types::list_employee_types);
    let name = RwSignal::new(String::new());
    let picked = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let deploy = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(type_id) = picked.get_untracked() else {
            error.set(Some("Pick a role for the new agent.".to_owned()));
            return;
        };
        let agent_name = name.get_untracked().trim().to_owned();
        if agent_name.is_empty() {
            error.set(Some("Give the agent a name.".to_owned()));
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api_agents::create_agent(&type_id, &agent_name, None).await {
                Ok(_) => {
                    on_close.run(());
                    agents.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="panel-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="deploy-dialog">
            <h2>"Deploy New Agent"</h2>
            <input
                class="deploy-dialog__name"
                placeholder="Agent name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <Suspense fallback=|| view! { <p class="panel__empty">"Loading roles..."</p> }>
                {move || {
                    employee_types.get().map(|result| match result {
                        Ok(types) => types
                            .into_iter()
                            .map(|t| view! { <TypeOption employee_type=t picked/> })
                            .collect_view()
                            .into_any(),
                        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>
            <div class="deploy-dialog__actions">
                <button class="btn btn--ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=deploy>
                    "Deploy"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TypeOption(employee_type: EmployeeType, picked: RwSignal<Option<String>>) -> impl IntoView {
    let id = employee_type.id.clone();
    let select_id = employee_type.id.clone();
    view! {
        <div
            class=move || {
                if picked.get().as_deref() == Some(id.as_str()) {
                    "type-option type-option--picked"
                } else {
                    "type-option"
                }
            }
            on:click=move |_| picked.set(Some(select_id.clone()))
        >
            <span class="type-option__name">{employee_type.name.clone()}</span>
            <span class="type-option__desc">{employee_type.description.clone()}</span>
        </div>
    }
}
