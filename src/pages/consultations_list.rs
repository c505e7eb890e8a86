//! Consultation list. Shows the animal each visit belongs to and keeps
//! the error banner inline so an earlier load still renders.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Consultation;
use crate::util::format::short_datetime;

#[cfg(feature = "csr")]
use crate::state::session::{SessionState, expire_on_unauthorized};

#[component]
pub fn ConsultationsListPage() -> impl IntoView {
    let consultations = RwSignal::new(Vec::<Consultation>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<(i64, String)>);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_consultations().await {
            Ok(items) => consultations.set(items),
            Err(err) => {
                if !expire_on_unauthorized(session, &err) {
                    log::error!("falha ao listar consultas: {err}");
                    error.set(Some("Erro ao carregar consultas. Verifique o servidor.".to_owned()));
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
                match crate::net::api::delete_consultation(id).await {
                    Ok(()) => consultations.update(|list| list.retain(|c| c.id != id)),
                    Err(err) => {
                        if !expire_on_unauthorized(session, &err) {
                            log::error!("falha ao excluir consulta {id}: {err}");
                            error.set(Some("Erro ao excluir consulta. Tente novamente.".to_owned()));
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
                <div class="page-status page-status--loading">"Carregando consultas..."</div>
            }
            .into_any();
        }
        let items = consultations.get();
        if items.is_empty() {
            return view! {
                <div class="empty-state">"Nenhuma consulta agendada ainda."</div>
            }
            .into_any();
        }
        let rows = items
            .into_iter()
            .map(|consultation| {
                let id = consultation.id;
                let delete_label = consultation.animal_label();
                let when = short_datetime(&consultation.date);
                let notes = consultation
                    .notes
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| "N/A".to_owned());
                view! {
                    <tr>
                        <td>{consultation.animal_label()}</td>
                        <td>{when}</td>
                        <td>{consultation.veterinarian.clone()}</td>
                        <td class="cell--truncate">{notes}</td>
                        <td class="cell--actions">
                            <a class="link link--edit" href=format!("/consultas/editar/{id}")>
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
            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <th>"Animal"</th>
                            <th>"Data e Hora"</th>
                            <th>"Veterinário"</th>
                            <th>"Observações"</th>
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
                <h1>"Consultas Veterinárias 🩺"</h1>
                <a class="btn btn--primary" href="/consultas/novo">
                    "➕ Agendar Nova Consulta"
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
                .map(|(_, label)| {
                    view! {
                        <ConfirmDialog
                            message=format!(
                                "Tem certeza que deseja excluir a consulta do animal \"{label}\"?",
                            )
                            on_cancel=on_delete_cancel
                            on_confirm=on_delete_confirm
                        />
                    }
                })
        }}
    }
}
