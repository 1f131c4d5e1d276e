//! Combined login / signup page.
//!
//! DESIGN
//! ======
//! One form, two modes toggled in place. Validation runs locally before
//! any request; submit errors render in the standard banner. A
//! successful login navigates into the app (history replaced so Back
//! does not return to the form). A successful signup never signs the
//! visitor in: the confirmation message is shown and the form flips to
//! login mode.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::state::auth::AuthState;
use crate::state::session;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

/// Local form validation, applied before any request leaves the page.
fn validate(
    mode_is_signup: bool,
    email: &str,
    password: &str,
    organization: &str,
) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    if mode_is_signup {
        if password.len() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 8 characters.");
        }
        if organization.trim().is_empty() {
            return Err("Enter your organization's name.");
        }
    }
    Ok(())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(Mode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current_mode = mode.get_untracked();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let organization_value = organization.get_untracked().trim().to_owned();

        if let Err(message) = validate(
            current_mode == Mode::Signup,
            &email_value,
            &password_value,
            &organization_value,
        ) {
            error.set(Some(message.to_owned()));
            return;
        }

        error.set(None);
        notice.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match current_mode {
                Mode::Login => {
                    match session::login(auth, &email_value, &password_value).await {
                        Ok(()) => {
                            navigate(
                                "/app",
                                NavigateOptions {
                                    replace: true,
                                    ..NavigateOptions::default()
                                },
                            );
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }
                Mode::Signup => {
                    match session::signup(&email_value, &password_value, &organization_value)
                        .await
                    {
                        Ok(response) => {
                            notice.set(Some(response.message));
                            mode.set(Mode::Login);
                            password.set(String::new());
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }
            }
            busy.set(false);
        });
    };

    let toggle_mode = move |_| {
        mode.update(|m| {
            *m = match *m {
                Mode::Login => Mode::Signup,
                Mode::Signup => Mode::Login,
            };
        });
        error.set(None);
        notice.set(None);
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__branding">
                <Logo/>
                <h1 class="auth-page__pitch">
                    "Your AI Workforce," <br/>
                    <span class="auth-page__accent">"Reimagined."</span>
                </h1>
                <p class="auth-page__pitch-sub">
                    "Deploy intelligent agents that handle your calls, messages, and \
                     bookings 24/7. Seamlessly integrated. Beautifully designed."
                </p>
                <span class="auth-page__legal">"© 2025 Mesa AI Inc."</span>
            </div>

            <div class="auth-page__panel">
                <div class="auth-form">
                    <h2 class="auth-form__title">
                        {move || match mode.get() {
                            Mode::Login => "Welcome back",
                            Mode::Signup => "Create an account",
                        }}
                    </h2>
                    <p class="auth-form__subtitle">
                        {move || match mode.get() {
                            Mode::Login => "Enter your email to sign in to your account",
                            Mode::Signup => "Enter your email below to create your account",
                        }}
                    </p>

                    {move || {
                        error.get().map(|message| view! {
                            <crate::components::error_banner::ErrorBanner message/>
                        })
                    }}
                    {move || {
                        notice.get().map(|message| view! {
                            <div class="auth-form__notice">{message}</div>
                        })
                    }}

                    <form on:submit=submit>
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="name@example.com"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || mode.get() == Mode::Signup>
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Organization name"
                                prop:value=move || organization.get()
                                on:input=move |ev| organization.set(event_target_value(&ev))
                            />
                        </Show>
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Password"
                            autocomplete=move || {
                                if mode.get() == Mode::Signup { "new-password" } else { "current-password" }
                            }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    "Working..."
                                } else {
                                    match mode.get() {
                                        Mode::Login => "Sign In with Email",
                                        Mode::Signup => "Sign Up with Email",
                                    }
                                }
                            }}
                        </button>
                    </form>

                    <button class="auth-form__toggle" on:click=toggle_mode>
                        {move || match mode.get() {
                            Mode::Login => "Don't have an account? Sign Up",
                            Mode::Signup => "Already have an account? Sign In",
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
