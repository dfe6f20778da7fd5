//! Internal-consumption tracking page.

use contracts::domain::internal_consumption::{InternalConsumptionSummary, AREAS};
use contracts::domain::line_item;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::internal_consumption::collection::InternalConsumptions;
use crate::shared::api::use_api;
use crate::shared::components::{LineItemEditor, StatusLine};
use crate::shared::date_utils::format_date;
use crate::shared::dom;
use crate::shared::export;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListController, ScrollSentinel};

#[component]
pub fn InternalConsumptionTrackingPage() -> impl IntoView {
    let client = use_api();
    let controller = ListController::<InternalConsumptions>::new(client);

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

    let export_rows = move |_| {
        let rows = controller.state.with_untracked(|state| state.items.clone());
        let totals = line_item::totals(rows.iter().flat_map(|row| row.products.iter()));
        if let Err(error) = export::export_csv_with_totals(&rows, &totals, "consumos-internos.csv")
        {
            dom::alert(&error);
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
                <h1 class="page__title">"Consumos internos"</h1>
                <div class="page__header-actions">
                    <button class="btn" on:click=export_rows>
                        {icon("export")}
                        " Exportar"
                    </button>
                    <A href="/consumos/nuevo" attr:class="btn btn--primary">
                        {icon("plus")}
                        " Registrar consumo"
                    </A>
                </div>
            </header>

            <div class="tracking__filters">
                {filter_input("nombre_retira", "Retira", "text")}
                <div class="form__group">
                    <label class="form__label">"Área"</label>
                    <select
                        class="form__select"
                        prop:value=move || controller.criteria.with(|c| c.get("area"))
                        on:change=move |ev| {
                            controller.set_filter("area", event_target_value(&ev));
                            controller.submit_now();
                        }
                    >
                        <option value="">"Todas"</option>
                        {AREAS
                            .iter()
                            .map(|area| view! { <option value=*area>{*area}</option> })
                            .collect_view()}
                    </select>
                </div>
                {filter_input("motivo", "Motivo", "text")}
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
                                            move || consumption_row_view(row.clone(), controller)
                                        }
                                    >
                                        <ConsumptionEditForm controller=controller />
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

fn consumption_row_view(
    row: InternalConsumptionSummary,
    controller: ListController<InternalConsumptions>,
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
                <h2 class="tracking__order">{row.withdrawn_by.clone()}</h2>
                <p>
                    <span class="badge">{row.area.clone()}</span>
                    " · " {format_date(&row.date)}
                    " · Registrado por " {row.created_by.clone()}
                </p>
                <p>"Motivo: " {row.reason.clone()}</p>
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
fn ConsumptionEditForm(controller: ListController<InternalConsumptions>) -> impl IntoView {
    let withdrawn_by = Signal::derive(move || {
        controller
            .edit
            .with(|s| s.draft().map(|d| d.withdrawn_by.clone()).unwrap_or_default())
    });
    let area = Signal::derive(move || {
        controller
            .edit
            .with(|s| s.draft().map(|d| d.area.clone()).unwrap_or_default())
    });
    let reason = Signal::derive(move || {
        controller
            .edit
            .with(|s| s.draft().map(|d| d.reason.clone()).unwrap_or_default())
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
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Retira"</label>
                    <input
                        class="form__input"
                        prop:value=move || withdrawn_by.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_draft(|d| d.withdrawn_by = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Área"</label>
                    <select
                        class="form__select"
                        prop:value=move || area.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_draft(|d| d.area = value);
                        }
                    >
                        {AREAS
                            .iter()
                            .map(|a| {
                                view! {
                                    <option value=*a selected=move || area.get() == *a>
                                        {*a}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Motivo"</label>
                    <input
                        class="form__input"
                        prop:value=move || reason.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_draft(|d| d.reason = value);
                        }
                    />
                </div>
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
