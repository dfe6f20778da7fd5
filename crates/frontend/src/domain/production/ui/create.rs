//! Production registration form.

use contracts::domain::production::ProductionPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::production::api;
use crate::domain::registries;
use crate::shared::api::use_api;
use crate::shared::components::{LineItemsForm, Select};

#[component]
pub fn ProductionCreatePage() -> impl IntoView {
    let client = use_api();
    let navigate = use_navigate();

    let operator = RwSignal::new(String::new());
    let items = LineItemsForm::new(client);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let operators = RwSignal::new(Vec::<(String, String)>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(names) = registries::api::names(&client, "/operators").await {
                operators.set(names.into_iter().map(|n| (n.clone(), n)).collect());
            }
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let products = items.collect();
        if products.is_empty() {
            error.set(Some("Agregue al menos un producto".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let payload = ProductionPayload {
                operator: operator.get_untracked(),
                products,
            };
            let result = api::create(&client, &payload).await;
            busy.set(false);
            match result {
                Ok(_) => navigate("/producciones", Default::default()),
                Err(e) => error.set(Some(e.message_or("No se pudo registrar la producción"))),
            }
        });
    };

    view! {
        <section class="page create-form">
            <h1 class="page__title">"Registrar producción"</h1>
            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}
            <form on:submit=submit>
                <div class="form__row">
                    <Select
                        label="Operador"
                        required=true
                        value=Signal::derive(move || operator.get())
                        options=Signal::derive(move || operators.get())
                        on_change=Callback::new(move |value| operator.set(value))
                    />
                </div>
                {items.editor()}
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registrando..." } else { "Registrar" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
