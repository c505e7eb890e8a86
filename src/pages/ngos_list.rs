//! NGO list.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Ngo;

#[cfg(feature = "csr")]
use crate::state::session::{SessionState, expire_on_unauthorized};

#[component]
pub fn NgosListPage() -> impl IntoView {
    let ngos = RwSignal::new(Vec::<Ngo>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<i64>);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_ngos().await {
            Ok(items) => ngos.set(items),
            Err(err) => {
                if !expire_on_unauthorized(session, &err) {
                    log::error!("falha ao listar ONGs: {err}");
                    error.set(Some("Não foi possível carregar a lista de ONGs.".to_owned()));
                }
            }
        }
        loading.set(false);
    });

    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(id) = pending_delete.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_ngo(id).await {
                    Ok(()) => ngos.update(|list| list.retain(|n| n.id != id)),
                    Err(err) => {
                        if !expire_on_unauthorized(session, &err) {
                            log::error!("falha ao excluir ONG {id}: {err}");
                            error.set(Some("Não foi possível excluir a ONG.".to_owned()));
                        }
                    }
                }
                pending_delete.set(None);
            });
        }
        #[cfg(not(feature = "csr"))]
        pending_delete.set(None);
    });

    let body = move || {
        if loading.get() {
            return view! {
                <div class="page-status page-status--loading">"Carregando ONGs..."</div>
            }
            .into_any();
        }
        let items = ngos.get();
        let rows = if items.is_empty() {
            view! {
                <tr>
                    <td colspan="4" class="cell--empty">
                        "Nenhuma ONG cadastrada."
                    </td>
                </tr>
            }
            .into_any()
        } else {
            items
                .into_iter()
                .map(|ngo| {
                    let id = ngo.id;
                    view! {
                        <tr>
                            <td>{ngo.name.clone()}</td>
                            <td>{ngo.address.clone()}</td>
                            <td>{ngo.contact.clone()}</td>
                            <td class="cell--actions">
                                <a class="link link--edit" href=format!("/ongs/editar/{id}")>
                                    "Editar"
                                </a>
                                <button
                                    class="link link--danger"
                                    on:click=move |_| pending_delete.set(Some(id))
                                >
                                    "Excluir"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"Endereço"</th>
                            <th>"Contato"</th>
                            <th class="cell--center">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page page--wide">
            <div class="page-header">
                <h1>"Gerenciamento de ONGs"</h1>
                <a class="btn btn--primary" href="/ongs/novo">
                    "+ Cadastrar ONG"
                </a>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="form-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            {body}
            <div class="page-footer">
                <a class="btn" href="/">
                    "⬅ Voltar ao Painel"
                </a>
            </div>
        </div>
        {move || {
            pending_delete
                .get()
                .map(|_| {
                    view! {
                        <ConfirmDialog
                            message="Tem certeza que deseja excluir esta ONG?".to_owned()
                            on_cancel=on_delete_cancel
                            on_confirm=on_delete_confirm
                        />
                    }
                })
        }}
    }
}
