//! Login page: username + password against `POST /api/token/`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only anonymous route. A successful exchange establishes the session
//! (which also persists the token) and navigates to the dashboard; every
//! failure surfaces the same message, so the form never confirms whether a
//! username exists.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::session_store::LocalStorageStore;

/// Failure message shown for any rejected login attempt.
#[cfg(any(test, feature = "csr"))]
const LOGIN_FAILED: &str = "Falha no login. Verifique seu usuário e senha.";

/// Normalize the form fields before submission. The username is trimmed;
/// the password is taken as typed, spaces included.
fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Informe usuário e senha.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let logged_in = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            if logged_in.get() {
                navigate("/", leptos_router::NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        let (user, pass) = match validate_credentials(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&user, &pass).await {
                Ok(tokens) => {
                    session.set(SessionState::establish(&LocalStorageStore, &tokens));
                    logged_in.set(true);
                }
                Err(rejection) => {
                    log::warn!("login recusado: {rejection}");
                    error.set(Some(LOGIN_FAILED.to_owned()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, pass);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <div class="login-card__brand">
                    <span class="login-card__paw">"🐾"</span>
                    <h2>"PetCare Login"</h2>
                </div>
                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <label class="field">
                    <span class="field__label">"Usuário:"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Senha:"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
