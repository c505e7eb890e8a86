//! Animal list with edit and delete actions.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Animal;

#[cfg(feature = "csr")]
use crate::state::session::{SessionState, expire_on_unauthorized};

#[component]
pub fn AnimalsListPage() -> impl IntoView {
    let animals = RwSignal::new(Vec::<Animal>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<(i64, String)>);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_animals().await {
            Ok(items) => animals.set(items),
            Err(err) => {
                if !expire_on_unauthorized(session, &err) {
                    log::error!("falha ao listar animais: {err}");
                    error.set(Some("Não foi possível carregar os animais.".to_owned()));
                }
            }
        }
        loading.set(false);
    });

    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some((id, _)) = pending_delete.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_animal(id).await {
                    Ok(()) => animals.update(|list| list.retain(|a| a.id != id)),
                    Err(err) => {
                        if !expire_on_unauthorized(session, &err) {
                            log::error!("falha ao excluir animal {id}: {err}");
                            error.set(Some("Não foi possível excluir o animal.".to_owned()));
                        }
                    }
                }
                pending_delete.set(None);
            });
        }
        #[cfg(not(feature = "csr"))]
        pending_delete.set(None);
    });

    let table = move || {
        if loading.get() {
            return view! {
                <div class="page-status page-status--loading">"Carregando animais..."</div>
            }
            .into_any();
        }
        if let Some(message) = error.get() {
            return view! {
                <div class="page-status page-status--error">{message}</div>
            }
            .into_any();
        }
        let rows = animals
            .get()
            .into_iter()
            .map(|animal| {
                let id = animal.id;
                let delete_label = animal.name.clone();
                let ong = animal.ong_name.clone().unwrap_or_else(|| "N/A".to_owned());
                view! {
                    <tr>
                        <td>{animal.name.clone()}</td>
                        <td>{animal.species.as_value()}</td>
                        <td>{animal.age}</td>
                        <td class="cell--center">{if animal.adopted { "✅" } else { "❌" }}</td>
                        <td>{ong}</td>
                        <td class="cell--actions">
                            <a class="link link--edit" href=format!("/animais/editar/{id}")>
                                "Editar"
                            </a>
                            <button
                                class="link link--danger"
                                on:click=move |_| {
                                    pending_delete.set(Some((id, delete_label.clone())))
                                }
                            >
                                "Excluir"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div class="page page--wide">
                <div class="page-header">
                    <h1>"Lista de Animais 🐾"</h1>
                    <a class="btn btn--primary" href="/animais/novo">
                        "➕ Novo Animal"
                    </a>
                </div>
                <div class="table-wrap">
                    <table>
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"Espécie"</th>
                                <th>"Idade"</th>
                                <th>"Adotado"</th>
                                <th>"ONG"</th>
                                <th class="cell--center">"Ações"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
                <div class="page-footer">
                    <a class="btn" href="/">
                        "⬅ Voltar ao Painel"
                    </a>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        {table}
        {move || {
            pending_delete
                .get()
                .map(|(_, name)| {
                    view! {
                        <ConfirmDialog
                            message=format!("Excluir o animal {name}?")
                            on_cancel=on_delete_cancel
                            on_confirm=on_delete_confirm
                        />
                    }
                })
        }}
    }
}
