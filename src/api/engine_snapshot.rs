use serde::{Deserialize, Serialize};

use crate::core::{ArithmeticError, BinaryOperator};
use crate::state::CalculatorState;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
///
/// Unlike [`RenderSnapshot`](crate::display::RenderSnapshot), which carries
/// only what a display needs, this captures the full machine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub current: String,
    pub previous: Option<String>,
    pub operator: Option<BinaryOperator>,
    pub just_evaluated: bool,
    pub pending_new_operand: bool,
    pub expression: String,
    pub error: Option<ArithmeticError>,
}

impl EngineSnapshot {
    #[must_use]
    pub fn capture(state: &CalculatorState) -> Self {
        Self {
            current: state.current().as_str().to_owned(),
            previous: state.previous().map(|prev| prev.as_str().to_owned()),
            operator: state.operator(),
            just_evaluated: state.just_evaluated(),
            pending_new_operand: state.pending_new_operand(),
            expression: state.expression().to_owned(),
            error: state.error(),
        }
    }
}
