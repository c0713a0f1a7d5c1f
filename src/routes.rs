//! Route Paths and Navigation

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const TODOS: &str = "/todos";

/// Leave the SPA and load `path` from scratch.
///
/// Used after login, registration and logout so the session query starts
/// over with the new session cookie.
pub fn full_page_load(path: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!(path, "no window to navigate");
        return;
    };
    if let Err(err) = window.location().set_href(path) {
        tracing::error!(path, error = ?err, "navigation failed");
    }
}

/// Blocking browser alert
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!(message, "no window to alert");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        tracing::error!(message, error = ?err, "alert failed");
    }
}
