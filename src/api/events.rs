use serde::{Deserialize, Serialize};

use crate::core::BinaryOperator;

/// Discrete input event consumed by the engine.
///
/// Source-agnostic: pointer taps and keyboard presses both reduce to this
/// vocabulary (see [`event_for_key`](super::event_for_key) for the key
/// mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Digit(char),
    Decimal,
    Operator(BinaryOperator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
    Backspace,
}
