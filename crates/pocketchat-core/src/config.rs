//! Application configuration record.
//!
//! Loaded once at startup and treated as immutable for the rest of the
//! session. The app passes it explicitly into whatever needs it; nothing
//! reads configuration from ambient state.

use serde::Deserialize;

/// Application settings.
///
/// Deserialized from the embedded TOML asset at startup. Every field has
/// a default so a partial (or unparseable) config still yields a usable
/// record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Developer override: when true the compatibility gate always passes.
    pub dev_mode: bool,
    /// When false, mobile-only enforcement is disabled entirely.
    pub mobile_only_mode: bool,
    /// Enables verbose console logging.
    pub debug_mode: bool,
    /// Backend endpoint. Carried in the record but unused by the gate.
    pub api_url: String,
    /// Application version string.
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            mobile_only_mode: true,
            debug_mode: false,
            api_url: "https://api.example.com".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.dev_mode);
        assert!(config.mobile_only_mode);
        assert!(!config.debug_mode);
        assert_eq!(config.version, "1.0.0");
    }
}
