//! New-dispatch form with duplicate-order detection.

use contracts::domain::dispatch::DispatchCreate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::dispatch::api;
use crate::domain::registries;
use crate::shared::api::use_api;
use crate::shared::components::{Input, LineItemsForm, Select};
use crate::shared::dom;

#[component]
pub fn DispatchCreatePage() -> impl IntoView {
    let client = use_api();
    let navigate = use_navigate();

    let order = RwSignal::new(String::new());
    let dispatch_client = RwSignal::new(String::new());
    let driver = RwSignal::new(String::new());
    let package_number = RwSignal::new(String::new());
    let items = LineItemsForm::new(client);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let clients = RwSignal::new(Vec::<(String, String)>::new());
    let drivers = RwSignal::new(Vec::<(String, String)>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(names) = registries::api::names(&client, "/clients").await {
                clients.set(names.into_iter().map(|n| (n.clone(), n)).collect());
            }
            if let Ok(names) = registries::api::names(&client, "/drivers").await {
                drivers.set(names.into_iter().map(|n| (n.clone(), n)).collect());
            }
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let order_number = order.get_untracked().trim().to_string();
        let products = items.collect();
        if order_number.is_empty() || products.is_empty() {
            error.set(Some("Complete la orden y al menos un producto".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            // The order number is usually unique; warn before registering
            // a second dispatch under the same one.
            let force = match api::by_order(&client, &order_number).await {
                Ok(existing) if !existing.is_empty() => {
                    let proceed = dom::confirm(&format!(
                        "Ya existe un despacho con la orden {}. ¿Crear de todos modos?",
                        order_number
                    ));
                    if !proceed {
                        busy.set(false);
                        return;
                    }
                    true
                }
                _ => false,
            };

            let payload = DispatchCreate {
                order: order_number,
                client: dispatch_client.get_untracked(),
                driver: driver.get_untracked(),
                package_number: {
                    let n = package_number.get_untracked().trim().to_string();
                    (!n.is_empty()).then_some(n)
                },
                products,
                force,
            };

            let result = api::create(&client, &payload).await;
            busy.set(false);
            match result {
                Ok(_) => navigate("/despachos", Default::default()),
                Err(e) => error.set(Some(e.message_or("No se pudo crear el despacho"))),
            }
        });
    };

    view! {
        <section class="page create-form">
            <h1 class="page__title">"Nuevo despacho"</h1>
            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}
            <form on:submit=submit>
                <div class="form__row">
                    <Input
                        label="Orden"
                        required=true
                        value=Signal::derive(move || order.get())
                        on_input=Callback::new(move |value| order.set(value))
                    />
                    <Input
                        label="N° paquete (opcional)"
                        value=Signal::derive(move || package_number.get())
                        on_input=Callback::new(move |value| package_number.set(value))
                    />
                    <Select
                        label="Cliente"
                        required=true
                        value=Signal::derive(move || dispatch_client.get())
                        options=Signal::derive(move || clients.get())
                        on_change=Callback::new(move |value| dispatch_client.set(value))
                    />
                    <Select
                        label="Chofer"
                        required=true
                        value=Signal::derive(move || driver.get())
                        options=Signal::derive(move || drivers.get())
                        on_change=Callback::new(move |value| driver.set(value))
                    />
                </div>
                {items.editor()}
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creando..." } else { "Crear despacho" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
