use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::api::use_api;
use crate::shared::components::Input;
use crate::system::auth::api;

#[component]
pub fn RecoverPage() -> impl IntoView {
    let client = use_api();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::recover(&client, email.get_untracked()).await;
            busy.set(false);
            match result {
                Ok(_) => sent.set(true),
                Err(e) => error.set(Some(e.message_or("No se pudo enviar el correo"))),
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-page__card" on:submit=submit>
                <h1 class="auth-page__title">"Recuperar contraseña"</h1>
                {move || error.get().map(|msg| view! {
                    <p class="auth-page__error">{msg}</p>
                })}
                <Show
                    when=move || !sent.get()
                    fallback=|| view! {
                        <p class="auth-page__info">
                            "Si el correo existe, recibirá un código para restablecer su contraseña."
                        </p>
                    }
                >
                    <Input
                        label="Correo"
                        input_type="email"
                        required=true
                        value=Signal::derive(move || email.get())
                        on_input=Callback::new(move |value| email.set(value))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Enviar código"
                    </button>
                </Show>
                <p class="auth-page__links">
                    <A href="/reset-password">"Ya tengo un código"</A>
                    <A href="/login">"Volver"</A>
                </p>
            </form>
        </section>
    }
}
