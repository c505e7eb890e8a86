//! NGO create/edit form.

#[cfg(test)]
#[path = "ngo_form_test.rs"]
mod ngo_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(any(test, feature = "csr"))]
use crate::net::error::ApiError;
#[cfg(feature = "csr")]
use crate::net::types::NgoPayload;
#[cfg(feature = "csr")]
use crate::state::session::{SessionState, expire_on_unauthorized};

fn validate_ngo(name: &str, address: &str) -> Option<&'static str> {
    if name.trim().is_empty() || address.trim().is_empty() {
        return Some("O Nome e o Endereço são obrigatórios.");
    }
    None
}

#[cfg(any(test, feature = "csr"))]
fn save_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message: Some(message), .. } => message.clone(),
        _ => "Erro ao salvar a ONG.".to_owned(),
    }
}

#[component]
pub fn NgoFormPage() -> impl IntoView {
    let params = use_params_map();
    let ngo_id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let is_editing = ngo_id.is_some();

    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());

    let fetching = RwSignal::new(is_editing);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    #[cfg(feature = "csr")]
    let saved = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            if saved.get() {
                navigate("/ongs", leptos_router::NavigateOptions::default());
            }
        });
    }

    #[cfg(feature = "csr")]
    if let Some(id) = ngo_id {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_ngo(id).await {
                Ok(ngo) => {
                    name.set(ngo.name);
                    address.set(ngo.address);
                    contact.set(ngo.contact);
                }
                Err(err) => {
                    if !expire_on_unauthorized(session, &err) {
                        log::error!("falha ao carregar ONG {id}: {err}");
                        error.set(Some(
                            "Não foi possível carregar os dados da ONG para edição.".to_owned(),
                        ));
                    }
                }
            }
            fetching.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        error.set(None);
        if let Some(message) = validate_ngo(&name.get(), &address.get()) {
            error.set(Some(message.to_owned()));
            return;
        }
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let payload = NgoPayload {
                name: name.get(),
                address: address.get(),
                contact: contact.get(),
            };
            leptos::task::spawn_local(async move {
                let result = match ngo_id {
                    Some(id) => crate::net::api::update_ngo(id, &payload).await,
                    None => crate::net::api::create_ngo(&payload).await,
                };
                match result {
                    Ok(()) => saved.set(true),
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
        <Show
            when=move || !fetching.get()
            fallback=|| {
                view! {
                    <div class="page-status page-status--loading">"Carregando dados da ONG..."</div>
                }
            }
        >
            <div class="page page--narrow">
                <h1>{if is_editing { "Editar ONG" } else { "Cadastrar Nova ONG" }}</h1>

                <form class="card-form" on:submit=on_submit.clone()>
                    <Show when=move || error.get().is_some()>
                        <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <label class="field">
                        <span class="field__label">"Nome da ONG:"</span>
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
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
                        <span class="field__label">"Contato (Telefone/Email):"</span>
                        <input
                            type="text"
                            prop:value=move || contact.get()
                            on:input=move |ev| contact.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="form-actions">
                        <a class="btn" href="/ongs">
                            "Cancelar"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || {
                                if saving.get() {
                                    "Salvando..."
                                } else if is_editing {
                                    "Salvar Edição"
                                } else {
                                    "Cadastrar ONG"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
