//! Adopter create/edit form.
//!
//! The only form that lingers after saving: a success banner stays on
//! screen briefly before the list takes over.

#[cfg(test)]
#[path = "adopter_form_test.rs"]
mod adopter_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(any(test, feature = "csr"))]
use crate::net::error::ApiError;
#[cfg(feature = "csr")]
use crate::net::types::AdopterPayload;
#[cfg(feature = "csr")]
use crate::state::session::{SessionState, expire_on_unauthorized};

#[cfg(any(test, feature = "csr"))]
fn success_message(editing: bool) -> &'static str {
    if editing {
        "Adotante atualizado com sucesso!"
    } else {
        "Adotante cadastrado com sucesso!"
    }
}

/// A rejection carries the server's wording, or at least its status;
/// anything that never produced a response collapses into a generic network
/// complaint.
#[cfg(any(test, feature = "csr"))]
fn save_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { .. } => format!("Erro ao salvar: {err}"),
        _ => "Erro de rede. Tente novamente.".to_owned(),
    }
}

#[component]
pub fn AdopterFormPage() -> impl IntoView {
    let params = use_params_map();
    let adopter_id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let is_editing = adopter_id.is_some();

    let name = RwSignal::new(String::new());
    let cpf = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let loading = RwSignal::new(is_editing);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<&'static str>);
    #[cfg(feature = "csr")]
    let saved = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            if saved.get() {
                navigate("/adotantes", leptos_router::NavigateOptions::default());
            }
        });
    }

    #[cfg(feature = "csr")]
    if let Some(id) = adopter_id {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_adopter(id).await {
                Ok(adopter) => {
                    name.set(adopter.name);
                    cpf.set(adopter.cpf);
                    address.set(adopter.address);
                    email.set(adopter.email);
                    phone.set(adopter.phone);
                }
                Err(err) => {
                    if !expire_on_unauthorized(session, &err) {
                        log::error!("falha ao carregar adotante {id}: {err}");
                        error.set(Some(
                            "Não foi possível carregar os dados do adotante.".to_owned(),
                        ));
                    }
                }
            }
            loading.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        error.set(None);
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let payload = AdopterPayload {
                name: name.get(),
                cpf: cpf.get(),
                address: address.get(),
                email: email.get(),
                phone: phone.get(),
            };
            leptos::task::spawn_local(async move {
                let result = match adopter_id {
                    Some(id) => crate::net::api::update_adopter(id, &payload).await,
                    None => crate::net::api::create_adopter(&payload).await,
                };
                match result {
                    Ok(()) => {
                        success.set(Some(success_message(is_editing)));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                        saved.set(true);
                    }
                    Err(err) => {
                        if !expire_on_unauthorized(session, &err) {
                            error.set(Some(save_error_message(&err)));
                        }
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        saving.set(false);
    };

    view! {
        <div class="page page--narrow">
            <h1>
                {if is_editing { "Editar Adotante ✏️" } else { "Cadastrar Adotante 🐾" }}
            </h1>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <p class="page-status page-status--loading">"Carregando dados..."</p>
                    }
                }
            >
                <form class="card-form" on:submit=on_submit.clone()>
                    <Show when=move || success.get().is_some()>
                        <div class="form-success">{move || success.get().unwrap_or_default()}</div>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <label class="field">
                        <span class="field__label">"Nome:"</span>
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"CPF:"</span>
                        <input
                            type="text"
                            required
                            maxlength="14"
                            prop:value=move || cpf.get()
                            on:input=move |ev| cpf.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Endereço:"</span>
                        <input
                            type="text"
                            required
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Email:"</span>
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Telefone:"</span>
                        <input
                            type="tel"
                            required
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="form-actions">
                        <a class="btn" href="/adotantes">
                            "Voltar"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || {
                                if saving.get() {
                                    "Salvando..."
                                } else if is_editing {
                                    "Atualizar"
                                } else {
                                    "Cadastrar"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
