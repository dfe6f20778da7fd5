//! Credit-note tracking page with CSV export of the current results.

use contracts::domain::credit_note::CreditNoteSummary;
use contracts::domain::line_item;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::credit_note::api;
use crate::domain::credit_note::collection::CreditNotes;
use crate::shared::api::use_api;
use crate::shared::components::{LineItemEditor, StatusLine};
use crate::shared::date_utils::format_date;
use crate::shared::dom;
use crate::shared::export;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListController, ScrollSentinel};
use crate::shared::pdf;

#[component]
pub fn CreditNoteTrackingPage() -> impl IntoView {
    let client = use_api();
    let controller = ListController::<CreditNotes>::new(client);

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

    // Exports what is currently on screen, totals included.
    let export_rows = move |_| {
        let rows = controller.state.with_untracked(|state| state.items.clone());
        let totals = line_item::totals(rows.iter().flat_map(|row| row.products.iter()));
        if let Err(error) = export::export_csv_with_totals(&rows, &totals, "notas-credito.csv") {
            dom::alert(&error);
        }
    };

    let print_voucher = move |id: i64| {
        spawn_local(async move {
            match api::voucher_pdf(&client, id).await {
                Ok(bytes) => {
                    if let Err(error) = pdf::print_pdf(&bytes) {
                        log::error!("pdf print: {}", error);
                        dom::alert("No se pudo imprimir la nota de crédito");
                    }
                }
                Err(error) => dom::alert(&error.message_or("No se pudo imprimir la nota de crédito")),
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
                <h1 class="page__title">"Notas de crédito"</h1>
                <div class="page__header-actions">
                    <button class="btn" on:click=export_rows>
                        {icon("export")}
                        " Exportar"
                    </button>
                    <A href="/notas-credito/nueva" attr:class="btn btn--primary">
                        {icon("plus")}
                        " Nueva nota"
                    </A>
                </div>
            </header>

            <div class="tracking__filters">
                {filter_input("client", "Cliente", "text")}
                {filter_input("order_number", "Orden", "text")}
                {filter_input("invoice_number", "Factura", "text")}
                {filter_input("credit_note_number", "N° NC", "text")}
                {filter_input("reason", "Motivo", "text")}
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
                                            move || credit_note_row_view(
                                                row.clone(),
                                                controller,
                                                print_voucher,
                                            )
                                        }
                                    >
                                        <CreditNoteEditForm controller=controller />
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

fn credit_note_row_view(
    row: CreditNoteSummary,
    controller: ListController<CreditNotes>,
    print_voucher: impl Fn(i64) + Copy + 'static,
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
                <h2 class="tracking__order">{format!("NC {}", row.credit_note_number)}</h2>
                <p>
                    <strong>{row.client.clone()}</strong>
                    " · Orden " {row.order_number.clone()}
                    " · Factura " {row.invoice_number.clone()}
                    " · " {format_date(&row.date)}
                </p>
                <p>"Motivo: " {row.reason.clone()} " · Registrado por " {row.created_by.clone()}</p>
                <p class="tracking__products">{products}</p>
            </div>
            <div class="tracking__actions">
                <button
                    class="btn btn--icon"
                    title="Imprimir"
                    on:click=move |_| print_voucher(id)
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
fn CreditNoteEditForm(controller: ListController<CreditNotes>) -> impl IntoView {
    let text_field = move |label: &'static str,
                           get: fn(&super::super::collection::CreditNoteDraft) -> String,
                           set: fn(&mut super::super::collection::CreditNoteDraft, String)| {
        let value = Signal::derive(move || {
            controller
                .edit
                .with(|session| session.draft().map(get).unwrap_or_default())
        });
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <input
                    class="form__input"
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        controller.update_draft(|d| set(d, value));
                    }
                />
            </div>
        }
    };

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
                {text_field("Cliente", |d| d.client.clone(), |d, v| d.client = v)}
                {text_field("Orden", |d| d.order_number.clone(), |d, v| d.order_number = v)}
                {text_field("Factura", |d| d.invoice_number.clone(), |d, v| d.invoice_number = v)}
                {text_field("N° NC", |d| d.credit_note_number.clone(), |d, v| d.credit_note_number = v)}
                {text_field("Motivo", |d| d.reason.clone(), |d, v| d.reason = v)}
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
