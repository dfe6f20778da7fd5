use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1 class="page__title">"Página no encontrada"</h1>
            <p>
                <A href="/dashboard">"Volver al inicio"</A>
            </p>
        </section>
    }
}
