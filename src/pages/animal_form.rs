//! Animal create/edit form.
//!
//! Creation needs the NGO list before the form is usable; editing also
//! fetches the animal and carries its adopter key through untouched, since
//! the form has no adopter field.

#[cfg(test)]
#[path = "animal_form_test.rs"]
mod animal_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Ngo, Species};

#[cfg(any(test, feature = "csr"))]
use crate::net::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::AnimalPayload;
#[cfg(feature = "csr")]
use crate::state::session::{SessionState, expire_on_unauthorized};

fn validate_animal(name: &str, ong: i64) -> Option<&'static str> {
    if name.trim().is_empty() || ong == 0 {
        return Some("Preencha o nome do animal e selecione uma ONG válida.");
    }
    None
}

/// Assemble the wire body from raw field state. An unparseable age counts
/// as zero, mirroring the number input's empty state.
#[cfg(any(test, feature = "csr"))]
fn build_animal_payload(
    name: &str,
    age: &str,
    species: Species,
    adopted: bool,
    ong: i64,
    adopter: Option<i64>,
) -> AnimalPayload {
    AnimalPayload {
        name: name.trim().to_owned(),
        age: age.trim().parse().unwrap_or(0),
        species,
        adopted,
        ong,
        adopter,
    }
}

#[cfg(any(test, feature = "csr"))]
fn save_error_message(editing: bool, err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message: Some(message), .. } => message.clone(),
        _ => format!(
            "Erro ao {} o animal.",
            if editing { "atualizar" } else { "cadastrar" },
        ),
    }
}

#[component]
pub fn AnimalFormPage() -> impl IntoView {
    let params = use_params_map();
    let animal_id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let is_editing = animal_id.is_some();

    let name = RwSignal::new(String::new());
    let age = RwSignal::new("0".to_owned());
    let species = RwSignal::new(Species::default());
    let adopted = RwSignal::new(false);
    let selected_ong = RwSignal::new(0_i64);
    #[cfg(feature = "csr")]
    let adopter_id = RwSignal::new(None::<i64>);

    let ngos = RwSignal::new(Vec::<Ngo>::new());
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
                navigate("/animais", leptos_router::NavigateOptions::default());
            }
        });
    }

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_ngos().await {
            Ok(list) => {
                if !is_editing && selected_ong.get_untracked() == 0 {
                    if let Some(first) = list.first() {
                        selected_ong.set(first.id);
                    }
                }
                ngos.set(list);
            }
            Err(err) => {
                if !expire_on_unauthorized(session, &err) {
                    log::error!("falha ao listar ONGs: {err}");
                    error.set(Some("Não foi possível carregar as ONGs.".to_owned()));
                }
            }
        }
        if let Some(id) = animal_id {
            match crate::net::api::fetch_animal(id).await {
                Ok(animal) => {
                    name.set(animal.name);
                    age.set(animal.age.to_string());
                    species.set(animal.species);
                    adopted.set(animal.adopted);
                    selected_ong.set(animal.ong_id);
                    adopter_id.set(animal.adopter_id);
                }
                Err(err) => {
                    if !expire_on_unauthorized(session, &err) {
                        log::error!("falha ao carregar animal {id}: {err}");
                        error.set(Some(
                            "Não foi possível carregar os dados para edição.".to_owned(),
                        ));
                    }
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
        if let Some(message) = validate_animal(&name.get(), selected_ong.get()) {
            error.set(Some(message.to_owned()));
            return;
        }
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let payload = build_animal_payload(
                &name.get(),
                &age.get(),
                species.get(),
                adopted.get(),
                selected_ong.get(),
                adopter_id.get(),
            );
            leptos::task::spawn_local(async move {
                let result = match animal_id {
                    Some(id) => crate::net::api::update_animal(id, &payload).await,
                    None => crate::net::api::create_animal(&payload).await,
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

    view! {
        <Show
            when=move || !fetching.get()
            fallback=|| {
                view! { <div class="page-status page-status--loading">"Carregando dados..."</div> }
            }
        >
            <div class="page page--narrow">
                <h1>
                    {move || {
                        if is_editing {
                            format!("Editar Animal: {}", name.get())
                        } else {
                            "Cadastrar Novo Animal 🐕".to_owned()
                        }
                    }}
                </h1>

                <form class="card-form" on:submit=on_submit.clone()>
                    <Show when=move || error.get().is_some()>
                        <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <label class="field">
                        <span class="field__label">"Nome:"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Idade (anos):"</span>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || age.get()
                            on:input=move |ev| age.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Espécie:"</span>
                        <select
                            prop:value=move || species.get().as_value()
                            on:change=move |ev| {
                                species
                                    .set(
                                        Species::from_value(&event_target_value(&ev))
                                            .unwrap_or_default(),
                                    )
                            }
                        >
                            {Species::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_value()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="field">
                        <span class="field__label">"ONG:"</span>
                        <select
                            prop:value=move || selected_ong.get().to_string()
                            on:change=move |ev| {
                                selected_ong.set(event_target_value(&ev).parse().unwrap_or(0))
                            }
                        >
                            <option value="0" disabled>
                                "Selecione uma ONG"
                            </option>
                            {move || {
                                ngos.get()
                                    .into_iter()
                                    .map(|ngo| {
                                        view! {
                                            <option value=ngo.id.to_string()>{ngo.name.clone()}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>

                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || adopted.get()
                            on:change=move |ev| adopted.set(event_target_checked(&ev))
                        />
                        <span class="field__label">"Já foi adotado?"</span>
                    </label>

                    <div class="form-actions">
                        <a class="btn" href="/animais">
                            "Cancelar"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || {
                                if saving.get() {
                                    if is_editing { "Atualizando..." } else { "Cadastrando..." }
                                } else if is_editing {
                                    "Salvar"
                                } else {
                                    "Cadastrar"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
