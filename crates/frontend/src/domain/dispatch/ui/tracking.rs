//! Dispatch tracking page: search, infinite scroll, inline edit, status
//! shortcuts and PDF receipts.

use contracts::domain::dispatch::{status_label, DispatchSummary, DISPATCH_STATUSES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::dispatch::api;
use crate::domain::dispatch::collection::Dispatches;
use crate::shared::api::use_api;
use crate::shared::components::{LineItemEditor, StatusLine};
use crate::shared::date_utils::format_date;
use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListController, ScrollSentinel};
use crate::shared::pdf;

#[component]
pub fn DispatchTrackingPage() -> impl IntoView {
    let client = use_api();
    let controller = ListController::<Dispatches>::new(client);

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

    // Optimistic merge for the granular status endpoints.
    let merge_row = move |updated: DispatchSummary| {
        controller.state.update(|state| {
            if let Some(row) = state.items.iter_mut().find(|row| row.id == updated.id) {
                *row = updated;
            }
        });
    };

    let mark_driver = move |id: i64| {
        spawn_local(async move {
            match api::mark_driver(&client, id).await {
                Ok(updated) => merge_row(updated),
                Err(error) => dom::alert(&error.message_or("No se pudo actualizar el estado")),
            }
        });
    };

    let mark_client = move |id: i64| {
        spawn_local(async move {
            match api::mark_client(&client, id).await {
                Ok(updated) => merge_row(updated),
                Err(error) => dom::alert(&error.message_or("No se pudo actualizar el estado")),
            }
        });
    };

    let download_receipt = move |id: i64| {
        spawn_local(async move {
            match api::receipt_pdf(&client, id).await {
                Ok(bytes) => {
                    if let Err(error) = pdf::download_pdf(&bytes, &format!("despacho-{}.pdf", id)) {
                        log::error!("pdf download: {}", error);
                        dom::alert("No se pudo descargar el comprobante");
                    }
                }
                Err(error) => dom::alert(&error.message_or("No se pudo descargar el comprobante")),
            }
        });
    };

    let print_receipt = move |id: i64| {
        spawn_local(async move {
            match api::receipt_pdf(&client, id).await {
                Ok(bytes) => {
                    if let Err(error) = pdf::print_pdf(&bytes) {
                        log::error!("pdf print: {}", error);
                        dom::alert("No se pudo imprimir el comprobante");
                    }
                }
                Err(error) => dom::alert(&error.message_or("No se pudo imprimir el comprobante")),
            }
        });
    };

    let armed = Signal::derive(move || {
        controller
            .state
            .with(|state| !state.loading() && state.has_more())
    });

    view! {
        <section class="page tracking">
            <header class="page__header">
                <h1 class="page__title">"Despachos"</h1>
                <A href="/despachos/nuevo" attr:class="btn btn--primary">
                    {icon("plus")}
                    " Nuevo despacho"
                </A>
            </header>

            <div class="tracking__filters">
                {filter_input("cliente", "Cliente", "text")}
                {filter_input("orden", "Orden", "text")}
                {filter_input("factura", "Factura", "text")}
                {filter_input("usuario", "Usuario", "text")}
                {filter_input("chofer", "Chofer", "text")}
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
                                            move || dispatch_row_view(
                                                row.clone(),
                                                controller,
                                                mark_driver,
                                                mark_client,
                                                download_receipt,
                                                print_receipt,
                                            )
                                        }
                                    >
                                        <DispatchEditForm controller=controller />
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

fn dispatch_row_view(
    row: DispatchSummary,
    controller: ListController<Dispatches>,
    mark_driver: impl Fn(i64) + Copy + Send + Sync + 'static,
    mark_client: impl Fn(i64) + Copy + Send + Sync + 'static,
    download_receipt: impl Fn(i64) + Copy + 'static,
    print_receipt: impl Fn(i64) + Copy + 'static,
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
                <h2 class="tracking__order">
                    {format!("Orden {}", row.order)}
                    {row.package_number.map(|n| format!(" · Paquete {}", n))}
                </h2>
                <p>
                    <strong>{row.client.clone()}</strong>
                    " · Chofer: " {row.driver.clone()}
                    " · " {format_date(&row.date)}
                    " · Registrado por " {row.created_by.clone()}
                </p>
                <p>
                    <span class="badge">{status_label(&row.status).to_string()}</span>
                    {row.invoice_number.clone().map(|f| format!(" · Factura {}", f))}
                </p>
                <p class="tracking__products">{products}</p>
            </div>
            <div class="tracking__actions">
                <Show when=move || !row.delivered_driver>
                    <button class="btn btn--small" on:click=move |_| mark_driver(id)>
                        "Entregado a chofer"
                    </button>
                </Show>
                <Show when=move || !row.delivered_client>
                    <button class="btn btn--small" on:click=move |_| mark_client(id)>
                        "Entregado a cliente"
                    </button>
                </Show>
                <button
                    class="btn btn--icon"
                    title="Descargar comprobante"
                    on:click=move |_| download_receipt(id)
                >
                    {icon("export")}
                </button>
                <button
                    class="btn btn--icon"
                    title="Imprimir comprobante"
                    on:click=move |_| print_receipt(id)
                >
                    {icon("print")}
                </button>
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
fn DispatchEditForm(controller: ListController<Dispatches>) -> impl IntoView {
    let draft_field = move |get: fn(&super::super::collection::DispatchDraft) -> String| {
        Signal::derive(move || {
            controller
                .edit
                .with(|session| session.draft().map(get).unwrap_or_default())
        })
    };

    let order = draft_field(|d| d.order.clone());
    let client = draft_field(|d| d.client.clone());
    let driver = draft_field(|d| d.driver.clone());
    let invoice = draft_field(|d| d.invoice_number.clone());
    let status = draft_field(|d| d.status.clone());

    let items = Signal::derive(move || {
        controller
            .edit
            .with(|session| session.draft().map(|d| d.items.clone()).unwrap_or_default())
    });
    let suggestions = Signal::derive(move || controller.suggestions.get());

    view! {
        <form class="tracking__edit" on:submit=move |ev| {
            ev.prevent_default();
            controller.save();
        }>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Orden"</label>
                    <input
                        class="form__input"
                        prop:value=move || order.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_draft(|d| d.order = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Cliente"</label>
                    <input
                        class="form__input"
                        prop:value=move || client.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_draft(|d| d.client = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Chofer"</label>
                    <input
                        class="form__input"
                        prop:value=move || driver.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_draft(|d| d.driver = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Factura"</label>
                    <input
                        class="form__input"
                        prop:value=move || invoice.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_draft(|d| d.invoice_number = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Estado"</label>
                    <select
                        class="form__select"
                        prop:value=move || status.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_draft(|d| d.status = value);
                        }
                    >
                        {DISPATCH_STATUSES
                            .iter()
                            .map(|s| {
                                view! {
                                    <option value=*s selected=move || status.get() == *s>
                                        {status_label(s).to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
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
