//! Internal-consumption registration form.

use contracts::domain::internal_consumption::{InternalConsumptionPayload, AREAS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::internal_consumption::api;
use crate::shared::api::use_api;
use crate::shared::components::{Input, LineItemsForm, Select};

#[component]
pub fn InternalConsumptionCreatePage() -> impl IntoView {
    let client = use_api();
    let navigate = use_navigate();

    let withdrawn_by = RwSignal::new(String::new());
    let area = RwSignal::new(AREAS[0].to_string());
    let reason = RwSignal::new(String::new());
    let items = LineItemsForm::new(client);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let areas = AREAS
        .iter()
        .map(|a| (a.to_string(), a.to_string()))
        .collect::<Vec<_>>();

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
            let payload = InternalConsumptionPayload {
                withdrawn_by: withdrawn_by.get_untracked(),
                area: area.get_untracked(),
                reason: reason.get_untracked(),
                products,
            };
            let result = api::create(&client, &payload).await;
            busy.set(false);
            match result {
                Ok(_) => navigate("/consumos", Default::default()),
                Err(e) => error.set(Some(e.message_or("No se pudo registrar el consumo"))),
            }
        });
    };

    view! {
        <section class="page create-form">
            <h1 class="page__title">"Registrar consumo interno"</h1>
            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}
            <form on:submit=submit>
                <div class="form__row">
                    <Input
                        label="Nombre de quien retira"
                        required=true
                        value=Signal::derive(move || withdrawn_by.get())
                        on_input=Callback::new(move |value| withdrawn_by.set(value))
                    />
                    <Select
                        label="Área"
                        value=Signal::derive(move || area.get())
                        options=Signal::derive({
                            let areas = areas.clone();
                            move || areas.clone()
                        })
                        on_change=Callback::new(move |value| area.set(value))
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
                        {move || if busy.get() { "Registrando..." } else { "Registrar" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
