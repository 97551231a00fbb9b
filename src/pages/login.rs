//! Login page with email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in an anonymous-only gate; a successful login transitions the
//! session store, and the gate then bounces the user off this route. A
//! failed login surfaces the backend message inline and leaves the session
//! untouched.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::backend::BackendConfig;
use crate::state::session::SessionStore;

/// Loose shape check; the backend is the real validator.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Trim and check credentials before submission.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let config = expect_context::<BackendConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
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
                let result = async {
                    crate::net::identity::login(&config, &email_value, &password_value).await?;
                    crate::net::identity::fetch_current_account(&config)
                        .await?
                        .ok_or_else(|| "login succeeded but no session found".to_owned())
                }
                .await;
                match result {
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
            let _ = (&store, &config, &navigate, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="auth-card">
                <h1 class="auth-card__heading">"Sign in to your account"</h1>
                <p class="auth-card__alt">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <form class="auth-card__form" on:submit=on_submit>
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
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}
