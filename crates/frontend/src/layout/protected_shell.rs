//! Route shell for everything behind authentication.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, Redirect};

use super::navbar::Navbar;
use super::paywall::Paywall;
use crate::shared::api::use_api;
use crate::system::auth::{api, context::use_session};

/// Wraps the protected routes: unauthenticated visitors are sent to the
/// login page, limited accounts see the paywall, everyone else gets the
/// navbar plus the routed page.
#[component]
pub fn ProtectedShell() -> impl IntoView {
    let session = use_session();
    let client = use_api();

    // Refresh the profile once per shell mount; it carries the admin flag
    // for the navbar and the paywall state.
    Effect::new(move |_| {
        if !session.is_authenticated() {
            return;
        }
        spawn_local(async move {
            match api::me(&client).await {
                Ok(me) => {
                    session.set_admin(me.is_admin);
                    if me.is_limited {
                        session.mark_limited();
                    } else {
                        session.clear_limited();
                    }
                }
                Err(error) => log::error!("profile refresh: {}", error),
            }
        });
    });

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <div class="shell">
                <Navbar />
                <main class="shell__content">
                    <Show when=move || !session.is_limited() fallback=|| view! { <Paywall /> }>
                        <Outlet />
                    </Show>
                </main>
            </div>
        </Show>
    }
}
