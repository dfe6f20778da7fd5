use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        session.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <A href="/dashboard">"SignoApp"</A>
            </div>
            <ul class="navbar__links">
                <li><A href="/dashboard">{icon("dashboard")}" Inicio"</A></li>
                <li><A href="/despachos">{icon("dispatches")}" Despachos"</A></li>
                <li><A href="/notas-credito">{icon("credit-notes")}" Notas de crédito"</A></li>
                <li><A href="/consumos">{icon("consumptions")}" Consumos internos"</A></li>
                <li><A href="/producciones">{icon("productions")}" Producción"</A></li>
                <li><A href="/recepciones">{icon("receipts")}" Recepciones"</A></li>
                <li><A href="/productos">{icon("products")}" Productos"</A></li>
                <li><A href="/registros">{icon("registries")}" Registros"</A></li>
                <Show when=move || session.is_admin()>
                    <li><A href="/facturacion">{icon("billing")}" Facturación"</A></li>
                </Show>
            </ul>
            <div class="navbar__user">
                <A href="/perfil" attr:class="navbar__name" attr:title="Editar perfil">
                    {move || session.user_name().unwrap_or_default()}
                </A>
                <button class="btn btn--icon" title="Cerrar sesión" on:click=logout>
                    {icon("logout")}
                </button>
            </div>
        </nav>
    }
}
