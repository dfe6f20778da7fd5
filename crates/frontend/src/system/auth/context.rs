//! Session context.
//!
//! One [`Session`] is created at application start and provided as
//! context; pages read authentication state from it instead of touching
//! localStorage themselves, and the request layer clears it when the
//! backend rejects the token.

use leptos::prelude::*;

use super::{jwt, storage};

/// Reactive session state backed by localStorage.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    user_name: RwSignal<Option<String>>,
    /// Subscription lapsed; write operations are blocked by the backend.
    limited: RwSignal<bool>,
    admin: RwSignal<bool>,
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session context not found")
}

impl Session {
    /// Restore from localStorage, discarding a token that already expired.
    pub fn restore() -> Self {
        let now_secs = (js_sys::Date::now() / 1000.0) as i64;
        let stored = storage::get_token().filter(|token| !jwt::is_expired(token, now_secs));
        if stored.is_none() {
            storage::clear();
        }
        let user_name = stored.as_ref().and_then(|_| storage::get_user_name());

        Self {
            token: RwSignal::new(stored),
            user_name: RwSignal::new(user_name),
            limited: RwSignal::new(false),
            admin: RwSignal::new(false),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Reactive; used by the route guards.
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn user_name(&self) -> Option<String> {
        self.user_name.get()
    }

    pub fn sign_in(&self, token: String, name: String) {
        storage::save_token(&token);
        storage::save_user_name(&name);
        self.token.set(Some(token));
        self.user_name.set(Some(name));
        self.limited.set(false);
    }

    /// Display name changed through the profile page; the token stays.
    pub fn update_name(&self, name: String) {
        storage::save_user_name(&name);
        self.user_name.set(Some(name));
    }

    pub fn sign_out(&self) {
        storage::clear();
        self.token.set(None);
        self.user_name.set(None);
        self.limited.set(false);
        self.admin.set(false);
    }

    pub fn mark_limited(&self) {
        self.limited.set(true);
    }

    pub fn clear_limited(&self) {
        self.limited.set(false);
    }

    pub fn is_limited(&self) -> bool {
        self.limited.get()
    }

    pub fn set_admin(&self, admin: bool) {
        self.admin.set(admin);
    }

    pub fn is_admin(&self) -> bool {
        self.admin.get()
    }
}
