//! Mobile device detection and the compatibility predicate.
//!
//! The predicate is total over its inputs: missing or malformed data
//! (an empty user agent, a zero-sized viewport) simply evaluates to an
//! incompatible verdict. It never errors and has no side effects.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::AppConfig;

/// Maximum viewport width (CSS pixels) still considered a mobile device.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Platform tokens that identify a mobile browser in the user agent.
///
/// Matched against the lowercased user agent string.
static MOBILE_UA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini")
        .expect("mobile UA pattern must compile")
});

// ============================================================================
// Viewport
// ============================================================================

/// A snapshot of the viewport dimensions in CSS pixels.
///
/// Read fresh from the environment at every gate evaluation and discarded
/// afterwards; never cached across evaluations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Format the dimensions for display, e.g. `1920 × 1080px`.
    pub fn display(&self) -> String {
        format!("{} × {}px", self.width, self.height)
    }
}

// ============================================================================
// Predicate
// ============================================================================

/// Whether the user agent string identifies a mobile browser.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_UA_PATTERN.is_match(&user_agent.to_ascii_lowercase())
}

/// Whether the viewport width falls within the mobile breakpoint.
#[inline]
pub fn is_mobile_width(width: u32) -> bool {
    width <= MOBILE_MAX_WIDTH
}

/// The compatibility predicate.
///
/// Returns true when the current environment qualifies as a mobile device,
/// or unconditionally when the developer override is active. Both the user
/// agent check and the width check must pass; a desktop browser shrunk to
/// a narrow window does not qualify.
pub fn is_compatible(config: &AppConfig, user_agent: &str, viewport: Viewport) -> bool {
    if config.dev_mode {
        return true;
    }
    is_mobile_user_agent(user_agent) && is_mobile_width(viewport.width)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

    fn enforcing_config() -> AppConfig {
        AppConfig {
            dev_mode: false,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_mobile_user_agents() {
        assert!(is_mobile_user_agent(IPHONE_UA));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0)"));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(is_mobile_user_agent("BlackBerry9700/5.0.0.862"));
        assert!(!is_mobile_user_agent(DESKTOP_UA));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn test_mobile_width_breakpoint() {
        assert!(is_mobile_width(0));
        assert!(is_mobile_width(375));
        assert!(is_mobile_width(768));
        assert!(!is_mobile_width(769));
        assert!(!is_mobile_width(1920));
    }

    #[test]
    fn test_dev_mode_overrides_everything() {
        let config = AppConfig {
            dev_mode: true,
            ..AppConfig::default()
        };
        assert!(is_compatible(&config, DESKTOP_UA, Viewport::new(1920, 1080)));
        assert!(is_compatible(&config, "", Viewport::new(0, 0)));
    }

    #[test]
    fn test_wide_viewport_is_incompatible_regardless_of_ua() {
        let config = enforcing_config();
        assert!(!is_compatible(&config, IPHONE_UA, Viewport::new(1024, 768)));
        assert!(!is_compatible(&config, DESKTOP_UA, Viewport::new(1920, 1080)));
    }

    #[test]
    fn test_iphone_at_phone_resolution_is_compatible() {
        let config = enforcing_config();
        assert!(is_compatible(&config, IPHONE_UA, Viewport::new(375, 812)));
    }

    #[test]
    fn test_desktop_at_desktop_resolution_is_incompatible() {
        let config = enforcing_config();
        assert!(!is_compatible(&config, DESKTOP_UA, Viewport::new(1920, 1080)));
    }

    #[test]
    fn test_narrow_desktop_window_is_incompatible() {
        // A desktop browser resized below the breakpoint still fails the UA check.
        let config = enforcing_config();
        assert!(!is_compatible(&config, DESKTOP_UA, Viewport::new(400, 900)));
    }

    #[test]
    fn test_viewport_display_format() {
        assert_eq!(Viewport::new(1920, 1080).display(), "1920 × 1080px");
        assert_eq!(Viewport::new(375, 812).display(), "375 × 812px");
    }
}
