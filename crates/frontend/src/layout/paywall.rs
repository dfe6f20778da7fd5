use leptos::prelude::*;

/// Blocking panel shown instead of the app when the subscription lapsed.
/// The backend enforces the block with 402; this is only the explanation.
#[component]
pub fn Paywall() -> impl IntoView {
    view! {
        <section class="paywall">
            <div class="paywall__card">
                <h1 class="paywall__title">"Suscripción vencida"</h1>
                <p class="paywall__text">
                    "Su suscripción está al día de corte y el acceso quedó limitado. "
                    "Regularice el pago para seguir registrando movimientos."
                </p>
                <p class="paywall__text">
                    "Si ya pagó, contacte al administrador para reactivar la cuenta."
                </p>
            </div>
        </section>
    }
}
