use serde::{Deserialize, Serialize};

use crate::state::CalculatorState;

/// Everything the display layer needs after one event.
///
/// Formatting (thousands separators, font-size scaling, exponential
/// abbreviation of huge magnitudes) is the sink's job; the engine keeps the
/// value as an exact decimal string. While the machine is in error the
/// display value is the human-readable message, e.g. `"Can't ÷ 0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub display_value: String,
    pub expression_text: String,
    pub is_error: bool,
}

impl RenderSnapshot {
    #[must_use]
    pub fn capture(state: &CalculatorState) -> Self {
        let display_value = match state.error() {
            Some(err) => err.to_string(),
            None => state.current().as_str().to_owned(),
        };
        Self {
            display_value,
            expression_text: state.expression().to_owned(),
            is_error: state.is_error(),
        }
    }
}
