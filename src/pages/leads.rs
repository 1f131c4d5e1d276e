//! Leads table with filtering and a detail modal.
//!
//! DESIGN
//! ======
//! Server-side filters (hot flag, service type) key the resource; the
//! text search is applied client-side over the fetched page so typing
//! never hits the network. Manual capture goes through an add-lead
//! modal, deleting through the detail modal; both refetch the table.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api_leads::{self, LeadQuery, NewLead};
use crate::net::types::Lead;

const PAGE_LIMIT: u32 = 100;

const SERVICE_TYPES: [(&str, &str); 6] = [
    ("all", "All Services"),
    ("office_cleaning", "Office Cleaning"),
    ("fm_support", "FM Support"),
    ("end_of_tenancy", "End of Tenancy"),
    ("airbnb", "Airbnb"),
    ("deep_clean", "Deep Clean"),
];

/// Score band used for color coding: 7+ burns, 5+ warms.
fn score_tier(score: i64) -> &'static str {
    if score >= 7 {
        "high"
    } else if score >= 5 {
        "medium"
    } else {
        "low"
    }
}

/// Short label for the urgency window.
fn urgency_label(urgency: Option<&str>) -> Option<String> {
    urgency.map(|u| {
        match u {
            "within_48h" => "48h".to_owned(),
            "within_7days" => "7 days".to_owned(),
            "within_30days" => "30 days".to_owned(),
            "flexible" => "Flexible".to_owned(),
            other => other.to_owned(),
        }
    })
}

/// Case-insensitive match over name, email, phone, and service type. An
/// empty query matches everything.
fn matches_search(lead: &Lead, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let hit = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|v| v.to_lowercase().contains(&query))
    };
    hit(&lead.name) || hit(&lead.email) || hit(&lead.phone) || hit(&lead.service_type)
}

/// A manually captured lead needs a name and at least one way to reach
/// them; the backend defaults everything else.
fn validate_new_lead(name: &str, email: &str, phone: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Enter the lead's name.");
    }
    if email.trim().is_empty() && phone.trim().is_empty() {
        return Err("Enter an email or phone number.");
    }
    Ok(())
}

/// Counter row: (total, hot, new, converted).
fn summarize(leads: &[Lead]) -> (usize, usize, usize, usize) {
    let hot = leads.iter().filter(|l| l.is_hot).count();
    let fresh = leads.iter().filter(|l| l.status == "new").count();
    let converted = leads.iter().filter(|l| l.status == "converted").count();
    (leads.len(), hot, fresh, converted)
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let hot_only = RwSignal::new(false);
    let service = RwSignal::new("all".to_owned());
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Lead>);
    let adding = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let leads = LocalResource::new(move || {
        let is_hot = hot_only.get().then_some(true);
        let service_type = Some(service.get()).filter(|s| s != "all");
        async move {
            let query = LeadQuery {
                is_hot,
                service_type,
                limit: Some(PAGE_LIMIT),
                ..LeadQuery::default()
            };
            api_leads::list_leads(&query).await
        }
    });

    view! {
        <div class="page leads">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Leads"</h1>
                    <p class="page__subtitle">"Manage and track your sales leads"</p>
                </div>
                <div class="page__header-actions">
                    <button
                        class=move || {
                            if hot_only.get() { "btn btn--primary" } else { "btn btn--outline" }
                        }
                        on:click=move |_| hot_only.update(|h| *h = !*h)
                    >
                        "HOT Leads Only"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| adding.set(true)>
                        "+ Add Lead"
                    </button>
                </div>
            </div>

            {move || error.get().map(|message| view! { <ErrorBanner message/> })}

            <div class="leads__filters">
                <input
                    class="leads__search"
                    placeholder="Search by name, email, phone, or service..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="leads__service"
                    on:change=move |ev| service.set(event_target_value(&ev))
                >
                    {SERVICE_TYPES
                        .iter()
                        .map(|&(value, label)| {
                            view! {
                                <option value=value selected=move || service.get() == value>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Suspense fallback=|| view! { <p class="panel__empty">"Loading leads..."</p> }>
                {move || {
                    leads.get().map(|result| match result {
                        Ok(all) => {
                            let (total, hot, fresh, converted) = summarize(&all);
                            let visible = all
                                .into_iter()
                                .filter(|lead| {
                                    search.with(|q| matches_search(lead, q.trim()))
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <div class="stat-grid stat-grid--compact">
                                    <CounterCard label="Total Leads" value=total/>
                                    <CounterCard label="HOT Leads" value=hot/>
                                    <CounterCard label="New" value=fresh/>
                                    <CounterCard label="Converted" value=converted/>
                                </div>
                                <LeadTable leads=visible selected/>
                            }
                            .into_any()
                        }
                        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>

            {move || {
                selected.get().map(|lead| view! {
                    <LeadModal
                        lead
                        leads
                        error
                        on_close=Callback::new(move |()| selected.set(None))
                    />
                })
            }}

            {move || {
                adding.get().then(|| view! {
                    <NewLeadModal leads on_close=Callback::new(move |()| adding.set(false))/>
                })
            }}
        </div>
    }
}

#[component]
fn CounterCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__title">{label}</span>
        </div>
    }
}

#[component]
fn LeadTable(leads: Vec<Lead>, selected: RwSignal<Option<Lead>>) -> impl IntoView {
    if leads.is_empty() {
        return view! { <p class="panel__empty">"No leads found"</p> }.into_any();
    }

    view! {
        <table class="lead-table">
            <thead>
                <tr>
                    <th>"Score"</th>
                    <th>"Name"</th>
                    <th>"Contact"</th>
                    <th>"Service"</th>
                    <th>"Urgency"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {leads
                    .into_iter()
                    .map(|lead| {
                        let row = lead.clone();
                        let score_class =
                            format!("lead-score lead-score--{}", score_tier(lead.lead_score));
                        let name = lead.name.clone().unwrap_or_else(|| "Unknown".to_owned());
                        let via = lead
                            .source_channel
                            .clone()
                            .unwrap_or_else(|| "unknown".to_owned());
                        let contact = lead
                            .email
                            .clone()
                            .or_else(|| lead.phone.clone())
                            .unwrap_or_else(|| "-".to_owned());
                        let service = lead
                            .service_type
                            .clone()
                            .map_or_else(|| "N/A".to_owned(), |s| s.replace('_', " "));
                        let urgency =
                            urgency_label(lead.urgency.as_deref()).unwrap_or_default();

                        view! {
                            <tr on:click=move |_| selected.set(Some(row.clone()))>
                                <td>
                                    <span class=score_class>{lead.lead_score}</span>
                                    {lead.is_hot.then(|| view! {
                                        <span class="lead-hot">"HOT"</span>
                                    })}
                                </td>
                                <td>
                                    <span class="lead-name">{name}</span>
                                    <span class="lead-via">{format!("via {via}")}</span>
                                </td>
                                <td>{contact}</td>
                                <td>{service}</td>
                                <td>{urgency}</td>
                                <td>
                                    <span class="badge">{lead.status.clone()}</span>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn LeadModal(
    lead: Lead,
    leads: LocalResource<Result<Vec<Lead>, crate::net::error::ApiError>>,
    error: RwSignal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let title = lead.name.clone().unwrap_or_else(|| "Lead Details".to_owned());
    let email = lead.email.clone().unwrap_or_else(|| "N/A".to_owned());
    let phone = lead.phone.clone().unwrap_or_else(|| "N/A".to_owned());
    let service = lead
        .service_type
        .clone()
        .map_or_else(|| "N/A".to_owned(), |s| s.replace('_', " "));
    let urgency = urgency_label(lead.urgency.as_deref()).unwrap_or_else(|| "N/A".to_owned());
    let notes = lead.notes.clone();
    let extra = serde_json::to_string_pretty(&lead.service_data).unwrap_or_default();

    let delete = {
        let id = lead.id.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match api_leads::delete_lead(&id).await {
                    Ok(_) => {
                        on_close.run(());
                        leads.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="panel-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="lead-modal">
            <div class="lead-modal__header">
                <div>
                    <h2>{title}</h2>
                    <p class="lead-modal__score">
                        {format!("Score: {}/10", lead.lead_score)}
                        {lead.is_hot.then_some(" - HOT LEAD")}
                    </p>
                </div>
                <button class="btn btn--ghost" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            <div class="lead-modal__section">
                <h3>"Contact Information"</h3>
                <p>{format!("Email: {email}")}</p>
                <p>{format!("Phone: {phone}")}</p>
            </div>

            <div class="lead-modal__section">
                <h3>"Service Details"</h3>
                <p>{format!("Service Type: {service}")}</p>
                <p>{format!("Urgency: {urgency}")}</p>
            </div>

            {notes.map(|n| view! {
                <div class="lead-modal__section">
                    <h3>"Notes"</h3>
                    <p>{n}</p>
                </div>
            })}

            <div class="lead-modal__section">
                <h3>"Additional Data"</h3>
                <pre class="lead-modal__data">{extra}</pre>
            </div>

            <div class="lead-modal__actions">
                <button class="btn btn--danger" disabled=move || busy.get() on:click=delete>
                    "Delete Lead"
                </button>
            </div>
        </div>
    }
}

#[component]
fn NewLeadModal(
    leads: LocalResource<Result<Vec<Lead>, crate::net::error::ApiError>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let save = move |_| {
        if busy.get_untracked() {
            return;
        }
        let name = name.get_untracked();
        let email = email.get_untracked();
        let phone = phone.get_untracked();
        if let Err(message) = validate_new_lead(&name, &email, &phone) {
            form_error.set(Some(message.to_owned()));
            return;
        }
        form_error.set(None);
        busy.set(true);

        let non_blank = |value: String| {
            let value = value.trim().to_owned();
            (!value.is_empty()).then_some(value)
        };
        let new_lead = NewLead {
            name: non_blank(name),
            email: non_blank(email),
            phone: non_blank(phone),
            notes: non_blank(notes.get_untracked()),
            ..NewLead::default()
        };
        leptos::task::spawn_local(async move {
            match api_leads::create_lead(&new_lead).await {
                Ok(_) => {
                    on_close.run(());
                    leads.refetch();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="panel-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="lead-modal">
            <div class="lead-modal__header">
                <h2>"Add Lead"</h2>
                <button class="btn btn--ghost" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            {move || form_error.get().map(|message| view! { <ErrorBanner message/> })}

            <div class="lead-modal__form">
                <input
                    class="lead-modal__input"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="lead-modal__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="lead-modal__input"
                    type="tel"
                    placeholder="Phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <textarea
                    class="lead-modal__input lead-modal__notes"
                    placeholder="Notes (optional)"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="lead-modal__actions">
                <button class="btn btn--primary" disabled=move || busy.get() on:click=save>
                    "Save Lead"
                </button>
            </div>
        </div>
    }
}
