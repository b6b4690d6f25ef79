//! Data models for the application.
//!
//! - [`CatalogEntry`] - a selectable agent/model entry
//! - [`ChatEntry`] - a sent chat message
//! - [`DropdownGroup`] - single-open dropdown group state

pub mod catalog;
pub mod chat;
pub mod dropdown;

pub use catalog::CatalogEntry;
pub use chat::ChatEntry;
pub use dropdown::{DropdownGroup, DropdownId};
