//! Production tracking page.

use contracts::domain::production::ProductionSummary;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::production::collection::Productions;
use crate::shared::api::use_api;
use crate::shared::components::{LineItemEditor, StatusLine};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListController, ScrollSentinel};

#[component]
pub fn ProductionTrackingPage() -> impl IntoView {
    let client = use_api();
    let controller = ListController::<Productions>::new(client);

    let filter_input = move |name: &'static str, label: &'static str, input_type: &'static str| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <input
                    class="form__input"
                    type=input_type
                    prop:value=move || controller.criteria.with(|c| c.get(name))
                    on:input=move |ev| controller.set_filter(name, event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            controller.submit_now();
                        }
                    }
                />
            </div>
        }
    };

    let armed = Signal::derive(move || {
        controller
            .state
            .with(|state| !state.loading() && state.has_more())
    });

    view! {
        <section class="page tracking">
            <header class="page__header">
                <h1 class="page__title">"Producción"</h1>
                <A href="/producciones/nueva" attr:class="btn btn--primary">
                    {icon("plus")}
                    " Registrar producción"
                </A>
            </header>

            <div class="tracking__filters">
                {filter_input("operator", "Operador", "text")}
                {filter_input("usuario", "Usuario", "text")}
                {filter_input("fecha_desde", "Desde", "date")}
                {filter_input("fecha_hasta", "Hasta", "date")}
            </div>

            <StatusLine message=Signal::derive(move || controller.message.get()) />

            <div class="tracking__list">
                {move || {
                    controller
                        .state
                        .with(|state| state.items.clone())
                        .into_iter()
                        .map(|row| {
                            let id = row.id;
                            let editing =
                                Signal::derive(move || controller.edit.with(|s| s.is_editing(id)));
                            view! {
                                <article class="card tracking__card">
                                    <Show
                                        when=move || editing.get()
                                        fallback={
                                            let row = row.clone();
                                            move || production_row_view(row.clone(), controller)
                                        }
                                    >
                                        <ProductionEditForm controller=controller />
                                    </Show>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || controller.state.with(|state| state.loading())>
                <p class="tracking__loading">"Cargando..."</p>
            </Show>

            <ScrollSentinel
                armed=armed
                on_visible=Callback::new(move |_| controller.load_more())
            />
        </section>
    }
}

fn production_row_view(
    row: ProductionSummary,
    controller: ListController<Productions>,
) -> impl IntoView {
    let id = row.id;
    let edit_row = row.clone();
    let products = row
        .products
        .iter()
        .map(|item| format!("{} {} {}", item.quantity, item.unit, item.name))
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="tracking__row">
            <div class="tracking__summary">
                <h2 class="tracking__order">{format!("Operador: {}", row.operator)}</h2>
                <p>{format_date(&row.date)} " · Registrado por " {row.created_by.clone()}</p>
                <p class="tracking__products">{products}</p>
            </div>
            <div class="tracking__actions">
                <button
                    class="btn btn--icon"
                    title="Editar"
                    on:click=move |_| controller.start_edit(&edit_row)
                >
                    {icon("edit")}
                </button>
                <button
                    class="btn btn--icon btn--danger"
                    title="Eliminar"
                    on:click=move |_| controller.delete(id)
                >
                    {icon("trash")}
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProductionEditForm(controller: ListController<Productions>) -> impl IntoView {
    let operator = Signal::derive(move || {
        controller
            .edit
            .with(|s| s.draft().map(|d| d.operator.clone()).unwrap_or_default())
    });
    let items = Signal::derive(move || {
        controller
            .edit
            .with(|s| s.draft().map(|d| d.items.clone()).unwrap_or_default())
    });
    let suggestions = Signal::derive(move || controller.suggestions.get());

    view! {
        <form class="tracking__edit" on:submit=move |ev| {
            ev.prevent_default();
            controller.save();
        }>
            <div class="form__group">
                <label class="form__label">"Operador"</label>
                <input
                    class="form__input"
                    prop:value=move || operator.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        controller.update_draft(|d| d.operator = value);
                    }
                />
            </div>

            <LineItemEditor
                items=items
                suggestions=suggestions
                on_name=Callback::new(move |(row, value): (usize, String)| {
                    controller.suggest(row, &value);
                    controller.update_item(row, move |item| item.name = value);
                })
                on_quantity=Callback::new(move |(row, quantity)| {
                    controller.update_item(row, move |item| item.quantity = quantity);
                })
                on_unit=Callback::new(move |(row, unit): (usize, String)| {
                    controller.update_item(row, move |item| item.unit = unit);
                })
                on_remove=Callback::new(move |row| controller.remove_item(row))
                on_add=Callback::new(move |_| controller.add_item())
                on_pick=Callback::new(move |(row, name)| controller.pick_suggestion(row, name))
            />

            <div class="form__actions">
                <button class="btn btn--primary" type="submit">"Guardar"</button>
                <button class="btn" type="button" on:click=move |_| controller.cancel_edit()>
                    "Cancelar"
                </button>
            </div>
        </form>
    }
}
