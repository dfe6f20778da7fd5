//! Shared request layer for the REST backend.
//!
//! All pages go through [`Api`]: it attaches the bearer token from the
//! session it was constructed with, enforces a fixed 15 s timeout, parses
//! the backend's `{ error, details }` bodies, and reacts to the session
//! gates (401/403/422 clear the session and return to the login page,
//! 402 sends the user to the dashboard where the paywall is shown).

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use contracts::system::api_error::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

use crate::shared::dom;
use crate::system::auth::context::Session;

/// Every request is bounded by this, independent of the caller.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Resolve the API base URL. `SIGNOAPP_API_URL` wins when set at build
/// time; otherwise the backend is assumed to live under `/api` on the
/// current origin.
pub fn api_base() -> String {
    if let Some(base) = option_env!("SIGNOAPP_API_URL") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}/api", protocol, host)
}

/// Failure of one request, already reduced to what the pages care about.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Superseded by a newer request; never shown to the user.
    Cancelled,
    /// Non-2xx response, with whatever message the error body carried.
    Http { status: u16, message: Option<String> },
    /// Transport failure, including the request timeout.
    Network(String),
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Server-provided message, or the given localized fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(msg), ..
            } => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Cancelled => write!(f, "request cancelled"),
            ApiError::Http { status, message } => match message {
                Some(msg) => write!(f, "HTTP {}: {}", status, msg),
                None => write!(f, "HTTP {}", status),
            },
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

/// Abortable handle for one in-flight request. The page fetchers keep the
/// latest handle and abort the previous one; aborting is the only
/// mutual-exclusion mechanism, there is no lock.
#[derive(Clone)]
pub struct RequestHandle {
    controller: AbortController,
    timed_out: Rc<Cell<bool>>,
}

impl RequestHandle {
    pub fn new() -> Self {
        Self {
            controller: AbortController::new().expect("AbortController unavailable"),
            timed_out: Rc::new(Cell::new(false)),
        }
    }

    pub fn abort(&self) {
        self.controller.abort();
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    fn mark_timed_out(&self) {
        self.timed_out.set(true);
    }

    fn did_time_out(&self) -> bool {
        self.timed_out.get()
    }
}

impl Default for RequestHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP collaborator constructed with the session at application start.
#[derive(Clone, Copy)]
pub struct Api {
    session: Session,
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("Api context not found")
}

impl Api {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", api_base(), path_and_query)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_json_with(path, &RequestHandle::new()).await
    }

    /// GET with a caller-owned abort handle, so a newer request can
    /// supersede this one.
    pub async fn get_json_with<T: DeserializeOwned>(
        &self,
        path: &str,
        handle: &RequestHandle,
    ) -> Result<T, ApiError> {
        let builder = Request::get(&self.url(path)).header("Cache-Control", "no-cache");
        let response = self.dispatch(builder, None, handle).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("respuesta inválida: {e}")))
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let json = serde_json::to_string(body)
            .map_err(|e| ApiError::Network(format!("serialización: {e}")))?;
        let builder = Request::post(&self.url(path));
        let response = self.dispatch(builder, Some(json), &RequestHandle::new()).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("respuesta inválida: {e}")))
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let json = serde_json::to_string(body)
            .map_err(|e| ApiError::Network(format!("serialización: {e}")))?;
        let builder = Request::put(&self.url(path));
        let response = self.dispatch(builder, Some(json), &RequestHandle::new()).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("respuesta inválida: {e}")))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = Request::delete(&self.url(path));
        self.dispatch(builder, None, &RequestHandle::new()).await?;
        Ok(())
    }

    /// GET returning raw bytes (PDF receipts).
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let builder = Request::get(&self.url(path));
        let response = self.dispatch(builder, None, &RequestHandle::new()).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Network(format!("lectura de respuesta: {e}")))
    }

    async fn dispatch(
        &self,
        builder: RequestBuilder,
        body: Option<String>,
        handle: &RequestHandle,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let signal = handle.signal();
        let mut builder = builder.abort_signal(Some(&signal));
        if let Some(token) = self.session.token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        // The timeout aborts the request's own controller; dropping the
        // timer on settle disarms it.
        let timeout_handle = handle.clone();
        let timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || {
            timeout_handle.mark_timed_out();
            timeout_handle.abort();
        });

        let sent = match body {
            Some(json) => match builder.header("Content-Type", "application/json").body(json) {
                Ok(request) => request.send().await,
                Err(e) => {
                    drop(timeout);
                    return Err(ApiError::Network(e.to_string()));
                }
            },
            None => builder.send().await,
        };
        drop(timeout);

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                if handle.did_time_out() {
                    return Err(ApiError::Network("tiempo de espera agotado".to_string()));
                }
                if is_abort_error(&e) {
                    return Err(ApiError::Cancelled);
                }
                return Err(ApiError::Network(e.to_string()));
            }
        };

        let status = response.status();
        if response.ok() {
            return Ok(response);
        }

        self.apply_gate(status);
        let error_body: ApiErrorBody = response.json().await.unwrap_or_default();
        Err(ApiError::Http {
            status,
            message: error_body.message().map(str::to_string),
        })
    }

    /// Session gates, mirroring the backend's auth and billing cutoffs.
    fn apply_gate(&self, status: u16) {
        match status {
            401 | 403 | 422 => {
                self.session.sign_out();
                dom::replace_location("/login");
            }
            402 => {
                self.session.mark_limited();
                dom::replace_location("/dashboard");
            }
            _ => {}
        }
    }
}

fn is_abort_error(error: &gloo_net::Error) -> bool {
    match error {
        gloo_net::Error::JsError(js) => js.name == "AbortError",
        _ => false,
    }
}
