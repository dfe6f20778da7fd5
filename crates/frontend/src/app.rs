use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboard::DashboardPage;
use crate::domain::credit_note::ui::{CreditNoteCreatePage, CreditNoteTrackingPage};
use crate::domain::dispatch::ui::{DispatchCreatePage, DispatchTrackingPage};
use crate::domain::internal_consumption::ui::{
    InternalConsumptionCreatePage, InternalConsumptionTrackingPage,
};
use crate::domain::product::ui::{ProductAddPage, ProductListPage};
use crate::domain::production::ui::{ProductionCreatePage, ProductionTrackingPage};
use crate::domain::receipt::ui::{ReceiptCreatePage, ReceiptTrackingPage};
use crate::domain::registries::RegistriesPage;
use crate::layout::ProtectedShell;
use crate::shared::api::Api;
use crate::system::auth::context::Session;
use crate::system::billing::BillingPage;
use crate::system::pages::{
    EditProfilePage, LoginPage, NotFoundPage, RecoverPage, RegisterPage, ResetPasswordPage,
};

#[component]
pub fn App() -> impl IntoView {
    // One session restored from storage, one request layer bound to it;
    // both provided to the whole tree.
    let session = Session::restore();
    provide_context(session);
    provide_context(Api::new(session));

    view! {
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/recover") view=RecoverPage />
                <Route path=path!("/reset-password") view=ResetPasswordPage />

                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("") view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/despachos") view=DispatchTrackingPage />
                    <Route path=path!("/despachos/nuevo") view=DispatchCreatePage />
                    <Route path=path!("/notas-credito") view=CreditNoteTrackingPage />
                    <Route path=path!("/notas-credito/nueva") view=CreditNoteCreatePage />
                    <Route path=path!("/consumos") view=InternalConsumptionTrackingPage />
                    <Route path=path!("/consumos/nuevo") view=InternalConsumptionCreatePage />
                    <Route path=path!("/producciones") view=ProductionTrackingPage />
                    <Route path=path!("/producciones/nueva") view=ProductionCreatePage />
                    <Route path=path!("/recepciones") view=ReceiptTrackingPage />
                    <Route path=path!("/recepciones/nueva") view=ReceiptCreatePage />
                    <Route path=path!("/productos") view=ProductListPage />
                    <Route path=path!("/productos/nuevo") view=ProductAddPage />
                    <Route path=path!("/registros") view=RegistriesPage />
                    <Route path=path!("/perfil") view=EditProfilePage />
                    <Route path=path!("/facturacion") view=BillingPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
