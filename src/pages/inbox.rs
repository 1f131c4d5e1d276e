//! Unified inbox.
//!
//! DESIGN
//! ======
//! The thread list is one resource keyed on the channel filter; the
//! message pane is a second resource keyed on the selected thread, so
//! switching threads refetches history without touching the list.
//! Replies go through the chat endpoint with the thread's own agent and
//! the pane refetches on success.

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api_chat::{self, ConversationQuery, OutgoingMessage};
use crate::net::types::{Conversation, Message};

const CHANNEL_FILTERS: [(&str, Option<&str>); 4] = [
    ("All Chats", None),
    ("WhatsApp", Some("whatsapp")),
    ("Voice", Some("voice")),
    ("Email", Some("email")),
];

/// Best available display name for a thread's contact.
fn display_name(conversation: &Conversation) -> &str {
    conversation
        .contact_name
        .as_deref()
        .or(conversation.contact_phone.as_deref())
        .or(conversation.contact_email.as_deref())
        .unwrap_or("Unknown contact")
}

/// Agent-authored messages render on the right of the pane.
fn from_agent(message: &Message) -> bool {
    message.role == "assistant"
}

#[component]
pub fn InboxPage() -> impl IntoView {
    let filter = RwSignal::new(None::<&'static str>);
    let selected = RwSignal::new(None::<Conversation>);
    let error = RwSignal::new(None::<String>);

    let conversations = LocalResource::new(move || {
        let channel = filter.get().map(str::to_owned);
        async move {
            let query = ConversationQuery {
                channel,
                ..ConversationQuery::default()
            };
            api_chat::list_conversations(&query).await
        }
    });

    let messages = LocalResource::new(move || {
        let id = selected.get().map(|c| c.id);
        async move {
            match id {
                Some(id) => api_chat::fetch_messages(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    view! {
        <div class="inbox">
            <div class="inbox__list">
                <div class="inbox__list-header">
                    <h1 class="inbox__title">"Inbox"</h1>
                    <div class="inbox__filters">
                        {CHANNEL_FILTERS
                            .iter()
                            .map(|&(label, channel)| {
                                view! {
                                    <button
                                        class=move || {
                                            if filter.get() == channel {
                                                "chip chip--active"
                                            } else {
                                                "chip"
                                            }
                                        }
                                        on:click=move |_| filter.set(channel)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <Suspense fallback=|| view! { <p class="panel__empty">"Loading..."</p> }>
                    {move || {
                        conversations.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="panel__empty">"No conversations yet."</p> }
                                    .into_any()
                            }
                            Ok(list) => list
                                .into_iter()
                                .map(|conversation| {
                                    view! { <ThreadRow conversation selected/> }
                                })
                                .collect_view()
                                .into_any(),
                            Err(err) => {
                                view! { <ErrorBanner message=err.to_string()/> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>

            <div class="inbox__pane">
                {move || error.get().map(|message| view! { <ErrorBanner message/> })}
                {move || match selected.get() {
                    None => view! {
                        <p class="inbox__placeholder">"Select a conversation to read it."</p>
                    }
                    .into_any(),
                    Some(conversation) => view! {
                        <ThreadView conversation messages error/>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ThreadRow(conversation: Conversation, selected: RwSignal<Option<Conversation>>) -> impl IntoView {
    let name = display_name(&conversation).to_owned();
    let channel = conversation.channel.clone().unwrap_or_default();
    let id = conversation.id.clone();
    let row = conversation.clone();

    view! {
        <div
            class=move || {
                let active = selected.with(|s| s.as_ref().is_some_and(|c| c.id == id));
                if active { "thread-row thread-row--active" } else { "thread-row" }
            }
            on:click=move |_| selected.set(Some(row.clone()))
        >
            <span class="thread-row__name">{name}</span>
            <span class="thread-row__channel">{channel}</span>
        </div>
    }
}

#[component]
fn ThreadView(
    conversation: Conversation,
    messages: LocalResource<Result<Vec<Message>, crate::net::error::ApiError>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let name = display_name(&conversation).to_owned();
    let channel = conversation.channel.clone().unwrap_or_default();
    let agent_name = conversation
        .agents
        .as_ref()
        .map_or_else(|| "your agent".to_owned(), |a| a.name.clone());
    let can_reply = conversation.agent_id.is_some();

    let send = {
        let conversation = conversation.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            let text = draft.get_untracked().trim().to_owned();
            if text.is_empty() {
                return;
            }
            let Some(agent_id) = conversation.agent_id.clone() else {
                return;
            };
            busy.set(true);
            let outgoing = OutgoingMessage {
                agent_id,
                message: text,
                conversation_id: Some(conversation.id.clone()),
                channel: conversation.channel.clone(),
                ..OutgoingMessage::default()
            };
            leptos::task::spawn_local(async move {
                match api_chat::send_message(&outgoing).await {
                    Ok(_) => {
                        draft.set(String::new());
                        messages.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="thread">
            <div class="thread__header">
                <h3 class="thread__name">{name.clone()}</h3>
                <span class="thread__channel">{channel}</span>
            </div>

            <div class="thread__messages">
                <Suspense fallback=|| view! { <p class="panel__empty">"Loading..."</p> }>
                    {move || {
                        messages.get().map(|result| match result {
                            Ok(history) => history
                                .into_iter()
                                .map(|message| {
                                    let class = if from_agent(&message) {
                                        "bubble bubble--agent"
                                    } else {
                                        "bubble bubble--contact"
                                    };
                                    view! { <div class=class>{message.content.clone()}</div> }
                                })
                                .collect_view()
                                .into_any(),
                            Err(err) => {
                                view! { <ErrorBanner message=err.to_string()/> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>

            <div class="thread__composer">
                <input
                    class="thread__input"
                    placeholder=format!("Message {name}...")
                    disabled=!can_reply
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get() || !can_reply
                    on:click=send
                >
                    "Send"
                </button>
            </div>
            <p class="thread__hint">{format!("Replies are handled by {agent_name}")}</p>
        </div>
    }
}
