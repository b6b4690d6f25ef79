//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Everything returns
//! `Option` or a defaulted value; a missing window (e.g. in a worker)
//! degrades to "environment unknown" rather than panicking.

use pocketchat_core::Viewport;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}

/// Read the current viewport dimensions.
///
/// Read fresh on every call; never cached. Dimensions default to zero when
/// the window is unavailable, which the compatibility predicate treats as
/// an incompatible environment.
pub fn viewport_snapshot() -> Viewport {
    let width = window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width.max(0.0) as u32, height.max(0.0) as u32)
}

/// Browser user agent string; empty when unavailable.
pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read a value from localStorage.
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a value to localStorage. Failures (quota, private mode) are ignored.
pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}
