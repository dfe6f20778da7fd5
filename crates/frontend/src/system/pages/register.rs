use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::api::use_api;
use crate::shared::components::Input;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let client = use_api();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if password.get_untracked() != confirm.get_untracked() {
            error.set(Some("Las contraseñas no coinciden".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let request = RegisterRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let result = api::register(&client, &request).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    session.sign_in(response.token, response.name);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    error.set(Some(e.message_or("No se pudo crear la cuenta")));
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-page__card" on:submit=submit>
                <h1 class="auth-page__title">"Crear cuenta"</h1>
                {move || error.get().map(|msg| view! {
                    <p class="auth-page__error">{msg}</p>
                })}
                <Input
                    label="Nombre"
                    required=true
                    value=Signal::derive(move || name.get())
                    on_input=Callback::new(move |value| name.set(value))
                />
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
                <Input
                    label="Confirmar contraseña"
                    input_type="password"
                    required=true
                    value=Signal::derive(move || confirm.get())
                    on_input=Callback::new(move |value| confirm.set(value))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creando..." } else { "Registrarse" }}
                </button>
                <p class="auth-page__links">
                    <A href="/login">"Ya tengo cuenta"</A>
                </p>
            </form>
        </section>
    }
}
