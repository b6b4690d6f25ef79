//! Utility modules for DOM access and console logging.
//!
//! - [`dom`] - window/viewport/user-agent/localStorage accessors
//! - [`log`] - console logging helpers

pub mod dom;
pub mod log;
