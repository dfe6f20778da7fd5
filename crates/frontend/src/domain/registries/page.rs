//! Reference registries page: clients, drivers, suppliers and operators
//! in one place, each with list, inline rename, add and delete.

use contracts::domain::registry::RegistryEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::api::use_api;
use crate::shared::dom;
use crate::shared::icons::icon;

#[component]
pub fn RegistriesPage() -> impl IntoView {
    view! {
        <section class="page registries">
            <h1 class="page__title">"Registros"</h1>
            <div class="registries__grid">
                <RegistrySection title="Clientes" path="/clients" />
                <RegistrySection title="Choferes" path="/drivers" />
                <RegistrySection title="Proveedores" path="/suppliers" />
                <RegistrySection title="Operadores" path="/operators" />
            </div>
        </section>
    }
}

#[component]
fn RegistrySection(title: &'static str, path: &'static str) -> impl IntoView {
    let client = use_api();
    let entries = RwSignal::new(Vec::<RegistryEntry>::new());
    let new_name = RwSignal::new(String::new());
    // id and working name of the entry being renamed, one at a time
    let renaming = RwSignal::new(None::<(i64, String)>);
    let error = RwSignal::new(None::<String>);

    let reload = move || {
        spawn_local(async move {
            match api::list(&client, path).await {
                Ok(list) => {
                    entries.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("registry {}: {}", path, e);
                    error.set(Some("No se pudo cargar el registro".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| reload());

    let add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::create(&client, path, name).await {
                Ok(entry) => {
                    entries.update(|list| list.push(entry));
                    new_name.set(String::new());
                }
                Err(e) => dom::alert(&e.message_or("No se pudo agregar")),
            }
        });
    };

    let save_rename = move || {
        let Some((id, name)) = renaming.get_untracked() else {
            return;
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::rename(&client, path, id, name).await {
                Ok(updated) => {
                    entries.update(|list| {
                        if let Some(entry) = list.iter_mut().find(|e| e.id == id) {
                            *entry = updated;
                        }
                    });
                    renaming.set(None);
                }
                Err(e) => dom::alert(&e.message_or("No se pudo renombrar")),
            }
        });
    };

    let remove = move |id: i64| {
        if !dom::confirm("¿Eliminar esta entrada?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&client, path, id).await {
                Ok(()) => entries.update(|list| list.retain(|e| e.id != id)),
                Err(e) => dom::alert(&e.message_or("No se pudo eliminar")),
            }
        });
    };

    view! {
        <div class="card registry">
            <h2 class="registry__title">{title}</h2>
            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}
            <ul class="registry__list">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| {
                            let id = entry.id;
                            let name = entry.name.clone();
                            let is_renaming = Signal::derive(move || {
                                renaming.get().map(|(rid, _)| rid) == Some(id)
                            });
                            view! {
                                <li class="registry__item">
                                    <Show
                                        when=move || is_renaming.get()
                                        fallback={
                                            let name = name.clone();
                                            move || {
                                                let start = name.clone();
                                                view! {
                                                    <span class="registry__name">{name.clone()}</span>
                                                    <button
                                                        class="btn btn--icon"
                                                        title="Renombrar"
                                                        on:click=move |_| {
                                                            renaming.set(Some((id, start.clone())))
                                                        }
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="btn btn--icon btn--danger"
                                                        title="Eliminar"
                                                        on:click=move |_| remove(id)
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                }
                                            }
                                        }
                                    >
                                        <input
                                            class="form__input"
                                            prop:value=move || {
                                                renaming
                                                    .get()
                                                    .map(|(_, name)| name)
                                                    .unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                renaming.set(Some((id, value)));
                                            }
                                            on:keydown=move |ev| {
                                                if ev.key() == "Enter" {
                                                    save_rename();
                                                } else if ev.key() == "Escape" {
                                                    renaming.set(None);
                                                }
                                            }
                                        />
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| save_rename()
                                        >
                                            "Guardar"
                                        </button>
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <form class="registry__add" on:submit=add>
                <input
                    class="form__input"
                    placeholder="Nuevo nombre"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button class="btn btn--secondary" type="submit">
                    {icon("plus")}
                    " Agregar"
                </button>
            </form>
        </div>
    }
}
