use leptos::prelude::*;

/// One-line status area under a page's toolbar. Shows the latest load
/// error or save/delete confirmation, or nothing.
#[component]
pub fn StatusLine(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="status-line">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
