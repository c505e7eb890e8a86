//! Dashboard page: the authenticated landing route.
//!
//! Pure navigation hub; the four management sections link out to the list
//! and form routes, and the header hosts logout.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::session_store::LocalStorageStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionState>>();

    // Clearing the session flips the route guard, which bounces the
    // browser back to /login on its own.
    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        session.set(SessionState::clear(&LocalStorageStore));
    };

    view! {
        <div class="page page--wide">
            <div class="dashboard-header">
                <div></div>
                <h1>"Painel Principal PetCare 🐾"</h1>
                <button class="btn btn--danger" on:click=on_logout>
                    "Sair (Logout)"
                </button>
            </div>

            <p class="dashboard-intro">
                "Bem-vindo ao PetCare! Aqui você pode cadastrar e gerenciar os animais, \
                 os adotantes, as consultas e as ONGs da sua organização."
            </p>

            <div class="dashboard-sections">
                <section class="dashboard-section">
                    <h2>"Gerenciamento de Animais 🐕"</h2>
                    <div class="dashboard-section__actions">
                        <a class="btn btn--primary" href="/animais/novo">
                            "➕ Cadastrar Animal"
                        </a>
                        <a class="btn btn--secondary" href="/animais">
                            "📋 Ver Lista de Animais"
                        </a>
                    </div>
                </section>

                <section class="dashboard-section">
                    <h2>"Gerenciamento de Adotantes 🧑‍🤝‍🧑"</h2>
                    <div class="dashboard-section__actions">
                        <a class="btn btn--primary" href="/adotantes/novo">
                            "👤 Cadastrar Adotante"
                        </a>
                        <a class="btn btn--secondary" href="/adotantes">
                            "📋 Ver Lista de Adotantes"
                        </a>
                    </div>
                </section>

                <section class="dashboard-section">
                    <h2>"Consultas Veterinárias 🩺"</h2>
                    <div class="dashboard-section__actions">
                        <a class="btn btn--primary" href="/consultas/novo">
                            "➕ Cadastrar Consulta"
                        </a>
                        <a class="btn btn--secondary" href="/consultas">
                            "📅 Ver Lista de Consultas"
                        </a>
                    </div>
                </section>

                <section class="dashboard-section">
                    <h2>"Gerenciamento de ONGs 🏠"</h2>
                    <div class="dashboard-section__actions">
                        <a class="btn btn--primary" href="/ongs/novo">
                            "➕ Cadastrar ONG"
                        </a>
                        <a class="btn btn--secondary" href="/ongs">
                            "🏢 Ver Lista de ONGs"
                        </a>
                    </div>
                </section>
            </div>
        </div>
    }
}
