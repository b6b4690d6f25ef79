//! UI components built with Leptos.
//!
//! - [`Shell`] - main chat layout, mounted only while the gate passes
//! - [`Overlay`] - full-screen device-compatibility blocker
//! - [`button`] - reusable button with closed variant/size sets
//! - [`dropdown`] - single-open-at-a-time selector
//! - [`composer`] - message input row
//! - [`toolbar`] - keep/undo actions
//! - [`icons`] - centralized icon definitions

pub mod button;
pub mod composer;
pub mod dropdown;
pub mod icons;
pub mod overlay;
pub mod shell;
pub mod toolbar;

pub use overlay::Overlay;
pub use shell::Shell;
