//! Supplier-order reception form.

use contracts::domain::receipt::ReceiptPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::receipt::api;
use crate::domain::registries;
use crate::shared::api::use_api;
use crate::shared::components::{Input, LineItemsForm, Select};

#[component]
pub fn ReceiptCreatePage() -> impl IntoView {
    let client = use_api();
    let navigate = use_navigate();

    let order = RwSignal::new(String::new());
    let supplier = RwSignal::new(String::new());
    let items = LineItemsForm::new(client);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let suppliers = RwSignal::new(Vec::<(String, String)>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(names) = registries::api::names(&client, "/suppliers").await {
                suppliers.set(names.into_iter().map(|n| (n.clone(), n)).collect());
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
            let payload = ReceiptPayload {
                order: order.get_untracked(),
                supplier: supplier.get_untracked(),
                status: "recibido".to_string(),
                products,
            };
            let result = api::create(&client, &payload).await;
            busy.set(false);
            match result {
                Ok(_) => navigate("/recepciones", Default::default()),
                Err(e) => error.set(Some(e.message_or("No se pudo registrar la recepción"))),
            }
        });
    };

    view! {
        <section class="page create-form">
            <h1 class="page__title">"Recibir pedido de proveedor"</h1>
            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}
            <form on:submit=submit>
                <div class="form__row">
                    <Input
                        label="Orden de compra"
                        required=true
                        value=Signal::derive(move || order.get())
                        on_input=Callback::new(move |value| order.set(value))
                    />
                    <Select
                        label="Proveedor"
                        required=true
                        value=Signal::derive(move || supplier.get())
                        options=Signal::derive(move || suppliers.get())
                        on_change=Callback::new(move |value| supplier.set(value))
                    />
                </div>
                {items.editor()}
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registrando..." } else { "Registrar recepción" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
