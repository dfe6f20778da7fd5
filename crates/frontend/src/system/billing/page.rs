//! Admin billing page: who paid, who is blocked, next cut-off date.

use std::collections::HashSet;

use chrono::NaiveDate;
use contracts::system::billing::{BillingStatus, BillingUser, MarkPaidRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, schedule};
use crate::shared::api::use_api;
use crate::shared::components::{Input, StatusLine};
use crate::shared::date_utils::format_date;
use crate::shared::dom;

#[component]
pub fn BillingPage() -> impl IntoView {
    let api = use_api();
    let status = RwSignal::new(None::<BillingStatus>);
    let users = RwSignal::new(Vec::<BillingUser>::new());
    let selected = RwSignal::new(HashSet::<i64>::new());
    let until = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);

    let reload = move || {
        spawn_local(async move {
            match api::users(&api).await {
                Ok(list) => users.set(list.users),
                Err(error) => {
                    log::error!("billing users: {}", error);
                    message.set(Some("No se pudo cargar la lista de usuarios".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        spawn_local(async move {
            match api::status(&api).await {
                Ok(s) => status.set(Some(s)),
                Err(error) => log::error!("billing status: {}", error),
            }
        });
        reload();
    });

    let toggle = move |id: i64| {
        selected.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let mark_selected_paid = move |_| {
        let ids: Vec<i64> = selected.get_untracked().into_iter().collect();
        let paid_until = until.get_untracked();
        if ids.is_empty() || paid_until.is_empty() {
            dom::alert("Seleccione usuarios y una fecha de pago");
            return;
        }
        spawn_local(async move {
            match api::mark_paid_multiple(&api, ids, paid_until).await {
                Ok(_) => {
                    selected.set(HashSet::new());
                    message.set(Some("Pagos registrados".to_string()));
                    reload();
                }
                Err(error) => dom::alert(&error.message_or("No se pudo registrar el pago")),
            }
        });
    };

    let block_selected = move |_| {
        let ids: Vec<i64> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            dom::alert("Seleccione usuarios para bloquear");
            return;
        }
        if !dom::confirm("¿Bloquear los usuarios seleccionados?") {
            return;
        }
        spawn_local(async move {
            match api::block_multiple(&api, ids).await {
                Ok(_) => {
                    selected.set(HashSet::new());
                    message.set(Some("Usuarios bloqueados".to_string()));
                    reload();
                }
                Err(error) => dom::alert(&error.message_or("No se pudo bloquear")),
            }
        });
    };

    let mark_one_paid = move |email: String| {
        let paid_until = until.get_untracked();
        if paid_until.is_empty() {
            dom::alert("Seleccione una fecha de pago");
            return;
        }
        spawn_local(async move {
            let request = MarkPaidRequest {
                email: Some(email),
                until: Some(paid_until),
            };
            match api::mark_paid(&api, &request).await {
                Ok(_) => {
                    message.set(Some("Pago registrado".to_string()));
                    reload();
                }
                Err(error) => dom::alert(&error.message_or("No se pudo registrar el pago")),
            }
        });
    };

    let next_cut = move || {
        status.get().and_then(|s| {
            let today = NaiveDate::parse_from_str(&s.today, "%Y-%m-%d").ok()?;
            let cut = schedule::next_cut_date(today, s.user.due_day);
            Some(format_date(&cut.format("%Y-%m-%d").to_string()))
        })
    };

    view! {
        <section class="page billing">
            <h1 class="page__title">"Facturación"</h1>
            {move || next_cut().map(|cut| view! {
                <p class="billing__cut">"Próximo corte: " {cut}</p>
            })}
            <StatusLine message=Signal::derive(move || message.get()) />

            <div class="billing__toolbar">
                <Input
                    label="Pagado hasta"
                    input_type="date"
                    value=Signal::derive(move || until.get())
                    on_input=Callback::new(move |value| until.set(value))
                />
                <button class="btn btn--primary" on:click=mark_selected_paid>
                    "Marcar pagado"
                </button>
                <button class="btn btn--danger" on:click=block_selected>
                    "Bloquear"
                </button>
            </div>

            <table class="table billing__table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Nombre"</th>
                        <th>"Correo"</th>
                        <th>"Pagado hasta"</th>
                        <th>"Estado"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                let id = user.id;
                                let email = user.email.clone();
                                let paid_until = user
                                    .subscription_paid_until
                                    .as_deref()
                                    .map(format_date)
                                    .unwrap_or_else(|| "—".to_string());
                                let state = if user.blocked {
                                    "Bloqueado"
                                } else {
                                    "Activo"
                                };
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.get().contains(&id)
                                                on:change=move |_| toggle(id)
                                            />
                                        </td>
                                        <td>{user.name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{paid_until}</td>
                                        <td>{state}</td>
                                        <td>
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| mark_one_paid(email.clone())
                                            >
                                                "Pagar"
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
