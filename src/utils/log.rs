//! Browser console logging helpers.

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Log a message to the browser console when `enabled` is set.
///
/// Callers gate this on `AppConfig::debug_mode` so production builds stay
/// quiet.
pub fn debug(enabled: bool, message: &str) {
    if enabled {
        web_sys::console::log_1(&message.into());
    }
}
