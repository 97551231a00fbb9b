//! Signup page: create an account, log it in, land on home.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::backend::BackendConfig;
use crate::state::session::SessionStore;

/// Minimum password length the backend accepts.
const MIN_PASSWORD_LEN: usize = 8;

/// Trim and check signup fields before submission.
fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let config = expect_context::<BackendConfig>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_signup_input(&name.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::create_account(
                    &config,
                    &name_value,
                    &email_value,
                    &password_value,
                )
                .await
                {
                    Ok(profile) => {
                        store.set_authenticated(profile);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &config, &navigate, name_value, email_value, password_value);
        }
    };

    view! {
        <div class="signup-page">
            <div class="auth-card">
                <h1 class="auth-card__heading">"Create an account"</h1>
                <p class="auth-card__alt">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <form class="auth-card__form" on:submit=on_submit>
                    <label class="auth-card__label">
                        "Name"
                        <input
                            class="auth-card__input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Email"
                        <input
                            class="auth-card__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            placeholder="At least 8 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
            </div>
        </div>
    }
}
