//! New-product form.

use contracts::domain::product::ProductCreate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::product::api;
use crate::shared::api::use_api;
use crate::shared::components::Input;

#[component]
pub fn ProductAddPage() -> impl IntoView {
    let client = use_api();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let initial_stock = stock.get_untracked().trim().parse::<f64>().unwrap_or(0.0);
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let payload = ProductCreate {
                name: name.get_untracked(),
                category: category.get_untracked(),
                stock: initial_stock,
            };
            let result = api::create(&client, &payload).await;
            busy.set(false);
            match result {
                Ok(_) => navigate("/productos", Default::default()),
                Err(e) => error.set(Some(e.message_or("No se pudo crear el producto"))),
            }
        });
    };

    view! {
        <section class="page create-form">
            <h1 class="page__title">"Nuevo producto"</h1>
            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}
            <form on:submit=submit>
                <div class="form__row">
                    <Input
                        label="Nombre"
                        required=true
                        value=Signal::derive(move || name.get())
                        on_input=Callback::new(move |value| name.set(value))
                    />
                    <Input
                        label="Categoría"
                        required=true
                        value=Signal::derive(move || category.get())
                        on_input=Callback::new(move |value| category.set(value))
                    />
                    <Input
                        label="Stock inicial"
                        input_type="number"
                        value=Signal::derive(move || stock.get())
                        on_input=Callback::new(move |value| stock.set(value))
                    />
                </div>
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creando..." } else { "Crear producto" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
