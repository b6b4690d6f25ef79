//! Application-side control logic.
//!
//! - [`GateController`] - wires the compatibility predicate to viewport events

mod gate;

pub use gate::GateController;
