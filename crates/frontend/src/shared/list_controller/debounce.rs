//! Trailing-edge debounce for the search inputs.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Keystrokes settle for this long before a search fires.
pub const DEBOUNCE_MS: u32 = 300;

/// Holds at most one pending timer; scheduling again cancels the previous
/// one (the `Timeout` cancels on drop). Timers are not `Send`, hence the
/// local storage.
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            pending: StoredValue::new_local(None),
        }
    }

    pub fn call(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, f);
        self.pending.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
