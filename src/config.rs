//! Application configuration.
//!
//! Centralizes the constants used throughout the application. The
//! runtime-tunable settings live in `assets/config.toml`, embedded at
//! compile time with `include_str!` and parsed once at startup.

use pocketchat_core::AppConfig;

use crate::models::CatalogEntry;
use crate::utils::log;

// =============================================================================
// Settings (loaded at compile time)
// =============================================================================

/// Raw settings asset.
const CONFIG_TOML: &str = include_str!("../assets/config.toml");

/// Parse the embedded settings.
///
/// This is the single configuration source for the whole app. A malformed
/// asset falls back to [`AppConfig::default`] with a console warning rather
/// than taking the page down.
pub fn load() -> AppConfig {
    toml::from_str(CONFIG_TOML).unwrap_or_else(|err| {
        log::warn(&format!("invalid config.toml, using defaults: {err}"));
        AppConfig::default()
    })
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the shell header.
pub const APP_NAME: &str = "pocketchat";

// =============================================================================
// Gate Configuration
// =============================================================================

/// Delay before re-reading the viewport after an orientation change
/// (milliseconds). Platforms report stale dimensions until they settle.
pub const ORIENTATION_SETTLE_MS: u32 = 100;

// =============================================================================
// UI Configuration
// =============================================================================

/// Touch-friendly sizes and stacking layers.
pub mod ui {
    /// Minimum touch target size in CSS pixels.
    pub const MIN_TOUCH_TARGET: u32 = 44;
    /// Standard button height in CSS pixels.
    pub const BUTTON_HEIGHT: u32 = 48;

    /// Dropdown menu stacking layer.
    pub const Z_DROPDOWN: u32 = 1000;
    /// Blocking overlay stacking layer; above everything else.
    pub const Z_OVERLAY: u32 = 9999;
}

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage keys for persisted selections.
pub mod storage_keys {
    pub const SELECTED_AGENT: &str = "selected-agent";
    pub const SELECTED_MODEL: &str = "selected-model";
}

// =============================================================================
// Status Messages
// =============================================================================

/// User-facing status line messages.
pub mod messages {
    pub const CHANGES_SAVED: &str = "Changes saved!";
    pub const CHANGES_UNDONE: &str = "Changes undone!";
    pub const MESSAGE_SENT: &str = "Message sent!";
    pub const DEVICE_NOT_SUPPORTED: &str = "This app is optimized for mobile phones only.";
}

// =============================================================================
// Catalogs
// =============================================================================

/// Selectable AI agents for the agent dropdown.
pub const AI_AGENTS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "copilot",
        label: "Agent",
        description: "GitHub Copilot",
    },
    CatalogEntry {
        id: "claude",
        label: "Ask",
        description: "Claude AI",
    },
];

/// Selectable models for the model dropdown.
pub const AI_MODELS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "claude-sonnet",
        label: "Claude 3.7 Sonnet",
        description: "Latest Claude model",
    },
    CatalogEntry {
        id: "claude-haiku",
        label: "Claude 3.7 Haiku",
        description: "Fast Claude model",
    },
    CatalogEntry {
        id: "gpt4",
        label: "GPT-4 Turbo",
        description: "OpenAI GPT-4",
    },
];
