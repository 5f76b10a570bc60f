//! calc-rs: headless calculator input engine.
//!
//! This crate provides a pure state machine over digit entry, pending-operator
//! chaining, and error recovery. The engine owns its state, consumes discrete
//! input events, and notifies a display sink after every transition; all
//! presentation concerns (number formatting, animations, error flashing)
//! belong to the embedding application.

pub mod api;
pub mod core;
pub mod display;
pub mod error;
pub mod state;
pub mod telemetry;

pub use api::{CalcEngine, CalcEngineConfig};
pub use error::{CalcError, CalcResult};
