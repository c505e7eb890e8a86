//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::pages::{
    adopter_form::AdopterFormPage, adopters_list::AdoptersListPage, animal_form::AnimalFormPage,
    animals_list::AnimalsListPage, consultation_form::ConsultationFormPage,
    consultations_list::ConsultationsListPage, dashboard::DashboardPage, login::LoginPage,
    ngo_form::NgoFormPage, ngos_list::NgosListPage,
};
use crate::state::session::SessionState;
use crate::util::session_store::LocalStorageStore;

/// Root application component.
///
/// Restores the session from storage, provides it as shared context, and
/// sets up client-side routing. Everything except `/login` lives under the
/// guarded layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore(&LocalStorageStore));
    provide_context(session);

    view! {
        <Title text="PetCare"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("animais") view=AnimalsListPage/>
                    <Route
                        path=(StaticSegment("animais"), StaticSegment("novo"))
                        view=AnimalFormPage
                    />
                    <Route
                        path=(StaticSegment("animais"), StaticSegment("editar"), ParamSegment("id"))
                        view=AnimalFormPage
                    />
                    <Route path=StaticSegment("adotantes") view=AdoptersListPage/>
                    <Route
                        path=(StaticSegment("adotantes"), StaticSegment("novo"))
                        view=AdopterFormPage
                    />
                    <Route
                        path=(
                            StaticSegment("adotantes"),
                            StaticSegment("editar"),
                            ParamSegment("id"),
                        )
                        view=AdopterFormPage
                    />
                    <Route path=StaticSegment("consultas") view=ConsultationsListPage/>
                    <Route
                        path=(StaticSegment("consultas"), StaticSegment("novo"))
                        view=ConsultationFormPage
                    />
                    <Route
                        path=(
                            StaticSegment("consultas"),
                            StaticSegment("editar"),
                            ParamSegment("id"),
                        )
                        view=ConsultationFormPage
                    />
                    <Route path=StaticSegment("ongs") view=NgosListPage/>
                    <Route path=(StaticSegment("ongs"), StaticSegment("novo")) view=NgoFormPage/>
                    <Route
                        path=(StaticSegment("ongs"), StaticSegment("editar"), ParamSegment("id"))
                        view=NgoFormPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Layout for the authenticated area. Installs the login redirect once;
/// the pages underneath never re-check the session.
#[component]
fn ProtectedLayout() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let session = expect_context::<RwSignal<SessionState>>();
        let navigate = leptos_router::hooks::use_navigate();
        crate::util::guard::install_login_redirect(session, navigate);
    }

    view! { <Outlet/> }
}
