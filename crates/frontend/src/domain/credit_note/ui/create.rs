//! New credit-note form.

use contracts::domain::credit_note::CreditNotePayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::credit_note::api;
use crate::domain::registries;
use crate::shared::api::use_api;
use crate::shared::components::{Input, LineItemsForm, Select};

#[component]
pub fn CreditNoteCreatePage() -> impl IntoView {
    let client = use_api();
    let navigate = use_navigate();

    let note_client = RwSignal::new(String::new());
    let order_number = RwSignal::new(String::new());
    let invoice_number = RwSignal::new(String::new());
    let credit_note_number = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let items = LineItemsForm::new(client);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let clients = RwSignal::new(Vec::<(String, String)>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(names) = registries::api::names(&client, "/clients").await {
                clients.set(names.into_iter().map(|n| (n.clone(), n)).collect());
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
            let payload = CreditNotePayload {
                client: note_client.get_untracked(),
                order_number: order_number.get_untracked(),
                invoice_number: invoice_number.get_untracked(),
                credit_note_number: credit_note_number.get_untracked(),
                reason: reason.get_untracked(),
                products,
            };
            let result = api::create(&client, &payload).await;
            busy.set(false);
            match result {
                Ok(_) => navigate("/notas-credito", Default::default()),
                Err(e) => error.set(Some(e.message_or("No se pudo crear la nota de crédito"))),
            }
        });
    };

    view! {
        <section class="page create-form">
            <h1 class="page__title">"Nueva nota de crédito"</h1>
            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}
            <form on:submit=submit>
                <div class="form__row">
                    <Select
                        label="Cliente"
                        required=true
                        value=Signal::derive(move || note_client.get())
                        options=Signal::derive(move || clients.get())
                        on_change=Callback::new(move |value| note_client.set(value))
                    />
                    <Input
                        label="Orden"
                        required=true
                        value=Signal::derive(move || order_number.get())
                        on_input=Callback::new(move |value| order_number.set(value))
                    />
                    <Input
                        label="Factura"
                        required=true
                        value=Signal::derive(move || invoice_number.get())
                        on_input=Callback::new(move |value| invoice_number.set(value))
                    />
                    <Input
                        label="N° nota de crédito"
                        required=true
                        value=Signal::derive(move || credit_note_number.get())
                        on_input=Callback::new(move |value| credit_note_number.set(value))
                    />
                    <Input
                        label="Motivo"
                        required=true
                        value=Signal::derive(move || reason.get())
                        on_input=Callback::new(move |value| reason.set(value))
                    />
                </div>
                {items.editor()}
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creando..." } else { "Crear nota" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
