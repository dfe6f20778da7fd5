//! Product catalog with current stock.

use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::product::api;
use crate::shared::api::use_api;
use crate::shared::dom;
use crate::shared::icons::icon;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let client = use_api();
    let products = RwSignal::new(Vec::<Product>::new());
    let search = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let reload = move || {
        spawn_local(async move {
            match api::list(&client).await {
                Ok(list) => {
                    products.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("products: {}", e);
                    error.set(Some("No se pudieron cargar los productos".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| reload());

    let remove = move |id: i64| {
        if !dom::confirm("¿Eliminar este producto?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&client, id).await {
                Ok(()) => products.update(|list| list.retain(|p| p.id != id)),
                Err(e) => dom::alert(&e.message_or("No se pudo eliminar el producto")),
            }
        });
    };

    // Filtered client-side; the catalog is small compared to the
    // movement collections.
    let visible = move || {
        let needle = search.get().trim().to_lowercase();
        products
            .get()
            .into_iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="page products">
            <header class="page__header">
                <h1 class="page__title">"Productos"</h1>
                <A href="/productos/nuevo" attr:class="btn btn--primary">
                    {icon("plus")}
                    " Nuevo producto"
                </A>
            </header>

            <div class="form__group products__search">
                <input
                    class="form__input"
                    type="text"
                    placeholder="Buscar producto"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}

            <table class="table products__table">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Categoría"</th>
                        <th>"Stock"</th>
                        <th>"Creado por"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|product| {
                                let id = product.id;
                                view! {
                                    <tr>
                                        <td>{product.name.clone()}</td>
                                        <td>{product.category.clone()}</td>
                                        <td>{product.stock}</td>
                                        <td>{product.created_by.clone()}</td>
                                        <td>
                                            <button
                                                class="btn btn--icon btn--danger"
                                                title="Eliminar"
                                                on:click=move |_| remove(id)
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
        </section>
    }
}
