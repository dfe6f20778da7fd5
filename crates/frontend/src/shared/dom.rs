//! Thin helpers over `web_sys` for the handful of browser calls the pages
//! share: dialogs, scroll position and hard redirects.

/// Blocking browser alert. Used for save/delete failures, matching the
/// behavior users already know from the rest of the app.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking confirmation dialog. `false` when the window is unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking text prompt. `None` when cancelled or the window is
/// unavailable.
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok()?
}

/// Current vertical scroll offset of the page.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Restore a previously captured vertical scroll offset.
pub fn restore_scroll(y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Hard redirect, replacing the current history entry. Used by the request
/// layer when a response invalidates the session.
pub fn replace_location(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(path);
    }
}
