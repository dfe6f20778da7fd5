use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::api::use_api;
use crate::shared::components::Input;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let client = use_api();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result =
                api::login(&client, email.get_untracked(), password.get_untracked()).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    session.sign_in(response.token, response.name);
                    // Admin flag and paywall state come from the profile.
                    if let Ok(me) = api::me(&client).await {
                        session.set_admin(me.is_admin);
                        if me.is_limited {
                            session.mark_limited();
                        }
                    }
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    error.set(Some(e.message_or("Credenciales incorrectas")));
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-page__card" on:submit=submit>
                <h1 class="auth-page__title">"Iniciar sesión"</h1>
                {move || error.get().map(|msg| view! {
                    <p class="auth-page__error">{msg}</p>
                })}
                <Input
                    label="Correo"
                    input_type="email"
                    required=true
                    value=Signal::derive(move || email.get())
                    on_input=Callback::new(move |value| email.set(value))
                />
                <Input
                    label="Contraseña"
                    input_type="password"
                    required=true
                    value=Signal::derive(move || password.get())
                    on_input=Callback::new(move |value| password.set(value))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                </button>
                <p class="auth-page__links">
                    <A href="/recover">"¿Olvidó su contraseña?"</A>
                    <A href="/register">"Crear cuenta"</A>
                </p>
            </form>
        </section>
    }
}
