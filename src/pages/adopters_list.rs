//! Adopter list with edit and delete actions.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Adopter;
use crate::util::format::short_date;

#[cfg(feature = "csr")]
use crate::state::session::{SessionState, expire_on_unauthorized};

#[component]
pub fn AdoptersListPage() -> impl IntoView {
    let adopters = RwSignal::new(Vec::<Adopter>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<(i64, String)>);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_adopters().await {
            Ok(items) => adopters.set(items),
            Err(err) => {
                if !expire_on_unauthorized(session, &err) {
                    log::error!("falha ao listar adotantes: {err}");
                    error.set(Some(
                        "Não foi possível carregar a lista de adotantes. Verifique o servidor."
                            .to_owned(),
                    ));
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
                match crate::net::api::delete_adopter(id).await {
                    Ok(()) => adopters.update(|list| list.retain(|a| a.id != id)),
                    Err(err) => {
                        if !expire_on_unauthorized(session, &err) {
                            log::error!("falha ao excluir adotante {id}: {err}");
                            error.set(Some(
                                "Não foi possível excluir o adotante. Verifique as permissões."
                                    .to_owned(),
                            ));
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
                <div class="page-status page-status--loading">"Carregando adotantes..."</div>
            }
            .into_any();
        }
        if let Some(message) = error.get() {
            return view! {
                <div class="page-status page-status--error">{message}</div>
            }
            .into_any();
        }
        let rows = adopters
            .get()
            .into_iter()
            .map(|adopter| {
                let id = adopter.id;
                let delete_label = adopter.name.clone();
                let registered = short_date(&adopter.created_at);
                view! {
                    <tr>
                        <td>{adopter.name.clone()}</td>
                        <td>{adopter.cpf.clone()}</td>
                        <td>{adopter.email.clone()}</td>
                        <td>{adopter.phone.clone()}</td>
                        <td>{registered}</td>
                        <td class="cell--actions">
                            <a class="link link--edit" href=format!("/adotantes/editar/{id}")>
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
                    <h1>"Lista de Adotantes Cadastrados 🧑‍🤝‍🧑"</h1>
                    <a class="btn btn--primary" href="/adotantes/novo">
                        "➕ Novo Adotante"
                    </a>
                </div>
                <div class="table-wrap">
                    <table>
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"CPF"</th>
                                <th>"Email"</th>
                                <th>"Telefone"</th>
                                <th>"Cadastrado em"</th>
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
                            message=format!(
                                "Tem certeza que deseja excluir o adotante {name}? Esta ação é irreversível.",
                            )
                            on_cancel=on_delete_cancel
                            on_confirm=on_delete_confirm
                        />
                    }
                })
        }}
    }
}
