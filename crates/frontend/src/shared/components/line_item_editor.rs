//! Editable product-line table used by the inline edits and the create
//! forms. The caller owns the items; this component only reports edits
//! through callbacks.

use contracts::domain::line_item::{LineItem, UNITS};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::list_controller::Suggestions;

#[component]
pub fn LineItemEditor(
    /// Current line items of the draft being edited.
    #[prop(into)]
    items: Signal<Vec<LineItem>>,
    /// Product-name suggestions keyed by row.
    #[prop(into)]
    suggestions: Signal<Suggestions>,
    /// Name typed in a row (also refreshes that row's suggestions).
    on_name: Callback<(usize, String)>,
    /// Quantity changed in a row; only valid numbers are reported.
    on_quantity: Callback<(usize, f64)>,
    /// Unit picked in a row.
    on_unit: Callback<(usize, String)>,
    on_remove: Callback<usize>,
    on_add: Callback<()>,
    /// Suggestion clicked under a row.
    on_pick: Callback<(usize, String)>,
) -> impl IntoView {
    view! {
        <div class="line-items">
            <table class="line-items__table">
                <thead>
                    <tr>
                        <th>"Producto"</th>
                        <th>"Cantidad"</th>
                        <th>"Unidad"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(row, item)| {
                                let row_suggestions =
                                    Signal::derive(move || suggestions.get().get(row));
                                view! {
                                    <tr class="line-items__row">
                                        <td class="line-items__name">
                                            <input
                                                class="form__input"
                                                type="text"
                                                placeholder="Producto"
                                                prop:value=item.name.clone()
                                                on:input=move |ev| {
                                                    on_name.run((row, event_target_value(&ev)));
                                                }
                                            />
                                            <Show when=move || !row_suggestions.get().is_empty()>
                                                <ul class="line-items__suggestions">
                                                    {move || {
                                                        row_suggestions
                                                            .get()
                                                            .into_iter()
                                                            .map(|name| {
                                                                let picked = name.clone();
                                                                view! {
                                                                    <li
                                                                        class="line-items__suggestion"
                                                                        on:mousedown=move |_| {
                                                                            on_pick.run((row, picked.clone()));
                                                                        }
                                                                    >
                                                                        {name}
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()
                                                    }}
                                                </ul>
                                            </Show>
                                        </td>
                                        <td>
                                            <input
                                                class="form__input line-items__quantity"
                                                type="number"
                                                min="0"
                                                step="any"
                                                prop:value=item.quantity.to_string()
                                                on:input=move |ev| {
                                                    if let Ok(quantity) =
                                                        event_target_value(&ev).parse::<f64>()
                                                    {
                                                        on_quantity.run((row, quantity));
                                                    }
                                                }
                                            />
                                        </td>
                                        <td>
                                            <select
                                                class="form__select"
                                                prop:value=item.unit.clone()
                                                on:change=move |ev| {
                                                    on_unit.run((row, event_target_value(&ev)));
                                                }
                                            >
                                                {UNITS
                                                    .iter()
                                                    .map(|(value, label)| {
                                                        let selected = *value == item.unit;
                                                        view! {
                                                            <option value=*value selected=selected>
                                                                {*label}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td>
                                            <button
                                                type="button"
                                                class="btn btn--icon btn--danger"
                                                title="Quitar producto"
                                                on:click=move |_| on_remove.run(row)
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <button
                type="button"
                class="btn btn--secondary line-items__add"
                on:click=move |_| on_add.run(())
            >
                {icon("plus")}
                " Agregar producto"
            </button>
        </div>
    }
}
