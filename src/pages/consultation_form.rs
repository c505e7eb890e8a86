//! Consultation create/edit form.
//!
//! Scheduling depends on animals existing first: creation only offers
//! animals still up for adoption, and an empty list short-circuits into a
//! screen that sends the user off to register one. Editing fetches the
//! consultation and locks the animal choice.

#[cfg(test)]
#[path = "consultation_form_test.rs"]
mod consultation_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Animal;
use crate::util::format::today_iso;

#[cfg(any(test, feature = "csr"))]
use crate::net::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::ConsultationPayload;
#[cfg(feature = "csr")]
use crate::state::session::{SessionState, expire_on_unauthorized};
#[cfg(feature = "csr")]
use crate::util::format::date_part;

fn validate_consultation(animal: i64, veterinarian: &str) -> Option<&'static str> {
    if animal == 0 {
        return Some("Por favor, selecione um animal.");
    }
    if veterinarian.trim().is_empty() {
        return Some("O nome do veterinário é obrigatório.");
    }
    None
}

/// The server's own wording wins; failures without a usable body fall back
/// to a message that names the attempted action.
#[cfg(any(test, feature = "csr"))]
fn save_error_message(editing: bool, err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message: Some(message), .. } => message.clone(),
        _ => format!(
            "Erro ao {} a consulta.",
            if editing { "atualizar" } else { "agendar" },
        ),
    }
}

/// Notes ride along even when empty; the backend stores the empty string
/// rather than null.
#[cfg(any(test, feature = "csr"))]
fn build_consultation_payload(
    date: &str,
    veterinarian: &str,
    notes: &str,
    animal: i64,
) -> ConsultationPayload {
    ConsultationPayload {
        date: date.to_owned(),
        veterinarian: veterinarian.to_owned(),
        notes: Some(notes.to_owned()),
        animal_id: animal,
    }
}

#[component]
pub fn ConsultationFormPage() -> impl IntoView {
    let params = use_params_map();
    let consultation_id =
        params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let is_editing = consultation_id.is_some();

    let selected_animal = RwSignal::new(0_i64);
    let date = RwSignal::new(today_iso());
    let veterinarian = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let animals = RwSignal::new(Vec::<Animal>::new());
    let fetching = RwSignal::new(true);
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
                navigate("/consultas", leptos_router::NavigateOptions::default());
            }
        });
    }

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        // Editing lists every animal so the locked choice still resolves;
        // scheduling offers only the ones not yet adopted.
        let result = if is_editing {
            crate::net::api::list_animals().await
        } else {
            crate::net::api::list_available_animals().await
        };
        match result {
            Ok(list) => {
                if !is_editing {
                    if let Some(first) = list.first() {
                        selected_animal.set(first.id);
                    }
                }
                animals.set(list);
                if let Some(id) = consultation_id {
                    match crate::net::api::fetch_consultation(id).await {
                        Ok(consultation) => {
                            date.set(date_part(&consultation.date).to_owned());
                            veterinarian.set(consultation.veterinarian);
                            notes.set(consultation.notes.unwrap_or_default());
                            selected_animal.set(consultation.animal_id);
                        }
                        Err(err) => {
                            if !expire_on_unauthorized(session, &err) {
                                log::error!("falha ao carregar consulta {id}: {err}");
                                error.set(Some(
                                    "Não foi possível carregar os dados necessários. Tente novamente."
                                        .to_owned(),
                                ));
                            }
                        }
                    }
                }
            }
            Err(err) => {
                if !expire_on_unauthorized(session, &err) {
                    log::error!("falha ao listar animais: {err}");
                    error.set(Some(
                        "Não foi possível carregar os dados necessários. Tente novamente."
                            .to_owned(),
                    ));
                }
            }
        }
        fetching.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        error.set(None);
        if let Some(message) = validate_consultation(selected_animal.get(), &veterinarian.get()) {
            error.set(Some(message.to_owned()));
            return;
        }
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let payload = build_consultation_payload(
                &date.get(),
                &veterinarian.get(),
                &notes.get(),
                selected_animal.get(),
            );
            leptos::task::spawn_local(async move {
                let result = match consultation_id {
                    Some(id) => crate::net::api::update_consultation(id, &payload).await,
                    None => crate::net::api::create_consultation(&payload).await,
                };
                match result {
                    Ok(()) => saved.set(true),
                    Err(err) => {
                        if !expire_on_unauthorized(session, &err) {
                            error.set(Some(save_error_message(is_editing, &err)));
                        }
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        saving.set(false);
    };

    let content = move || {
        if fetching.get() {
            return view! {
                <div class="page-status page-status--loading">"Carregando dados..."</div>
            }
            .into_any();
        }
        if !is_editing && animals.get().is_empty() {
            return view! {
                <div class="page page--narrow empty-state">
                    <h1>"🚨 ERRO DE DEPENDÊNCIA"</h1>
                    <p>
                        "Nenhum animal foi encontrado. Você precisa cadastrar animais (não adotados) para agendar novas consultas."
                    </p>
                    <a class="btn btn--primary" href="/animais/novo">
                        "Cadastrar Animal"
                    </a>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="page page--narrow">
                <h1>{if is_editing { "Editar Consulta" } else { "Agendar Nova Consulta" }}</h1>

                <form class="card-form" on:submit=on_submit.clone()>
                    <Show when=move || error.get().is_some()>
                        <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <label class="field">
                        <span class="field__label">"Animal:"</span>
                        <select
                            required
                            disabled=is_editing
                            prop:value=move || selected_animal.get().to_string()
                            on:change=move |ev| {
                                selected_animal.set(event_target_value(&ev).parse().unwrap_or(0))
                            }
                        >
                            <option value="0" disabled>
                                "Selecione o Animal"
                            </option>
                            {move || {
                                animals
                                    .get()
                                    .into_iter()
                                    .map(|animal| {
                                        view! {
                                            <option value=animal
                                                .id
                                                .to_string()>
                                                {format!(
                                                    "{} ({})",
                                                    animal.name,
                                                    animal.species.as_value(),
                                                )}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <Show when=move || is_editing>
                            <span class="field__note">
                                "O animal não pode ser alterado após o agendamento."
                            </span>
                        </Show>
                    </label>

                    <label class="field">
                        <span class="field__label">"Data da Consulta:"</span>
                        <input
                            type="date"
                            required
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Nome do Veterinário:"</span>
                        <input
                            type="text"
                            required
                            placeholder="Dr.(a) Nome Sobrenome"
                            prop:value=move || veterinarian.get()
                            on:input=move |ev| veterinarian.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Observações/Diagnóstico:"</span>
                        <textarea
                            rows="4"
                            placeholder="Sintomas, diagnóstico, receitas, etc."
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="form-actions">
                        <a class="btn" href="/consultas">
                            "Cancelar"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || {
                                if saving.get() {
                                    if is_editing { "Atualizando..." } else { "Agendando..." }
                                } else if is_editing {
                                    "Salvar Edição"
                                } else {
                                    "Agendar Consulta"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        }
        .into_any()
    };

    view! { {content} }
}
