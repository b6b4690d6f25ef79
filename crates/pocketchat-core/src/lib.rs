//! Platform-independent core logic for the pocketchat app.
//!
//! Everything in this crate is pure: no DOM, no browser APIs, no I/O.
//! The WASM front end reads the environment (user agent, viewport) and
//! feeds it into these functions.
//!
//! - [`config`] - Application configuration record
//! - [`device`] - Mobile device detection and the compatibility predicate
//! - [`gate`] - Compatibility gate state machine
//! - [`button`] - Button variant/size enumerations

pub mod button;
pub mod config;
pub mod device;
pub mod gate;

pub use button::{ButtonSize, ButtonVariant};
pub use config::AppConfig;
pub use device::{MOBILE_MAX_WIDTH, Viewport, is_compatible, is_mobile_user_agent, is_mobile_width};
pub use gate::GateState;
