//! Profile page: change name, email and password, confirmed with an
//! emailed code, plus account deletion.

use contracts::system::auth::ProfileUpdateRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::api::use_api;
use crate::shared::components::Input;
use crate::shared::dom;
use crate::system::auth::{api, context::use_session};

/// Word the user must type to confirm deleting their account.
const DELETE_CONFIRMATION: &str = "ELIMINAR";

#[derive(Clone, Copy, PartialEq)]
enum Step {
    Edit,
    Code,
}

/// Where the confirmation code should go: the new address when the user
/// is changing it, otherwise the one on file.
fn code_target(current_email: &str, typed_email: &str) -> Option<String> {
    let typed = typed_email.trim();
    if typed.is_empty() || typed == current_email {
        None
    } else {
        Some(typed.to_string())
    }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let session = use_session();
    let client = use_api();
    let navigate = use_navigate();

    let current_email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let step = RwSignal::new(Step::Edit);
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::me(&client).await {
                Ok(me) => {
                    current_email.set(me.email.clone());
                    name.set(me.name);
                    email.set(me.email);
                }
                Err(e) => error.set(Some(e.message_or("No se pudo cargar el perfil"))),
            }
        });
    });

    let request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        message.set(None);
        let target = code_target(&current_email.get_untracked(), &email.get_untracked());
        spawn_local(async move {
            let result = api::request_profile_code(&client, target).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    message.set(Some("Código enviado. Revise su correo.".to_string()));
                    step.set(Step::Code);
                }
                Err(e) => error.set(Some(e.message_or("No se pudo enviar el código"))),
            }
        });
    };

    let confirm_changes = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let request = ProfileUpdateRequest {
            code: code.get_untracked().trim().to_string(),
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: {
                let typed = password.get_untracked();
                (!typed.is_empty()).then_some(typed)
            },
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::update_profile(&client, &request).await;
            busy.set(false);
            match result {
                Ok(updated) => {
                    session.update_name(updated.name);
                    message.set(Some("Perfil actualizado".to_string()));
                    navigate("/dashboard", Default::default());
                }
                Err(e) => error.set(Some(e.message_or("No se pudo actualizar el perfil"))),
            }
        });
    };

    let delete_account = move |_| {
        let warned = dom::confirm(
            "Esta acción eliminará su cuenta. Los despachos y registros que creó \
             seguirán visibles, pero ya no estarán asociados a usted. ¿Desea continuar?",
        );
        if !warned {
            return;
        }
        let typed = dom::prompt(&format!("Escriba \"{}\" para confirmar:", DELETE_CONFIRMATION));
        if typed.as_deref() != Some(DELETE_CONFIRMATION) {
            return;
        }
        spawn_local(async move {
            match api::delete_account(&client).await {
                Ok(()) => {
                    session.sign_out();
                    dom::alert("Su cuenta ha sido eliminada.");
                    dom::replace_location("/login");
                }
                Err(e) => dom::alert(&e.message_or("No se pudo eliminar la cuenta")),
            }
        });
    };

    view! {
        <section class="page profile">
            <h1 class="page__title">"Editar perfil"</h1>
            {move || error.get().map(|msg| view! { <p class="status-line">{msg}</p> })}
            {move || message.get().map(|msg| view! { <p class="status-line">{msg}</p> })}

            <Show
                when=move || step.get() == Step::Edit
                fallback=move || {
                    let confirm_changes = confirm_changes.clone();
                    view! {
                    <form class="profile__form" on:submit=confirm_changes>
                        <Input
                            label="Código recibido"
                            required=true
                            value=Signal::derive(move || code.get())
                            on_input=Callback::new(move |value| code.set(value))
                        />
                        <div class="form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Confirmar cambios"
                            </button>
                            <button class="btn" type="button" on:click=move |_| step.set(Step::Edit)>
                                "Volver"
                            </button>
                        </div>
                    </form>
                    }
                }
            >
                <form class="profile__form" on:submit=request_code>
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
                    <p class="profile__hint">
                        "Si cambia el correo, el código llegará al correo nuevo."
                    </p>
                    <Input
                        label="Nueva contraseña (opcional)"
                        input_type="password"
                        value=Signal::derive(move || password.get())
                        on_input=Callback::new(move |value| password.set(value))
                    />
                    <div class="form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Enviar código y continuar"
                        </button>
                        <button class="btn btn--danger" type="button" on:click=delete_account>
                            "Eliminar cuenta"
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_goes_to_the_new_email_only_when_it_changed() {
        assert_eq!(
            code_target("ana@signo.app", "nueva@signo.app"),
            Some("nueva@signo.app".to_string())
        );
        assert_eq!(code_target("ana@signo.app", "ana@signo.app"), None);
        assert_eq!(code_target("ana@signo.app", "  "), None);
    }
}
