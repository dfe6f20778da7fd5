//! Invisible marker element that triggers the next page load.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One-pixel div placed after the last row. While `armed`, an
/// `IntersectionObserver` watches it and fires `on_visible` whenever it
/// scrolls into view; the caller guards against re-entrant loads itself.
#[component]
pub fn ScrollSentinel(armed: Signal<bool>, on_visible: Callback<()>) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let observer: StoredValue<Option<IntersectionObserver>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move |_| {
        // Tear down first; the observer is rebuilt when the element or
        // the armed flag changes.
        if let Some(old) = observer.try_update_value(|o| o.take()).flatten() {
            old.disconnect();
        }

        if !armed.get() {
            return;
        }
        let Some(element) = node.get() else {
            return;
        };

        let callback = Closure::<dyn Fn(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible.run(());
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        if let Ok(created) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            created.observe(&element);
            observer.set_value(Some(created));
        }
        // The observer owns the callback for the rest of the page's life.
        callback.forget();
    });

    on_cleanup(move || {
        if let Some(old) = observer.try_update_value(|o| o.take()).flatten() {
            old.disconnect();
        }
    });

    view! { <div node_ref=node style="height: 1px;"></div> }
}
