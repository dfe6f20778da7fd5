use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::api::use_api;
use crate::shared::components::Input;
use crate::system::auth::api;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let client = use_api();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
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
            let result = api::reset_password(
                &client,
                email.get_untracked(),
                code.get_untracked(),
                password.get_untracked(),
            )
            .await;
            busy.set(false);
            match result {
                Ok(_) => navigate("/login", Default::default()),
                Err(e) => error.set(Some(e.message_or("No se pudo restablecer la contraseña"))),
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-page__card" on:submit=submit>
                <h1 class="auth-page__title">"Restablecer contraseña"</h1>
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
                    label="Código"
                    required=true
                    value=Signal::derive(move || code.get())
                    on_input=Callback::new(move |value| code.set(value))
                />
                <Input
                    label="Nueva contraseña"
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
                    "Restablecer"
                </button>
                <p class="auth-page__links">
                    <A href="/login">"Volver"</A>
                </p>
            </form>
        </section>
    }
}
