use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Non-numeric arithmetic outcome.
///
/// These are value outcomes the state machine consumes synchronously within
/// the same event, not propagated failures. The `Display` text doubles as the
/// human-readable message shown while the machine sits in its error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ArithmeticError {
    #[error("Can't ÷ 0")]
    DivisionByZero,

    #[error("Out of range")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Display symbol used when rebuilding expression text.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}

/// Applies one binary operation over exact decimals.
///
/// A zero divisor yields `DivisionByZero`, never a numeric result. Results
/// that leave the fixed-precision decimal range yield `OutOfRange`.
pub fn apply(a: Decimal, b: Decimal, op: BinaryOperator) -> Result<Decimal, ArithmeticError> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Subtract => a.checked_sub(b),
        BinaryOperator::Multiply => a.checked_mul(b),
        BinaryOperator::Divide => {
            if b.is_zero() {
                return Err(ArithmeticError::DivisionByZero);
            }
            a.checked_div(b)
        }
    };
    result.ok_or(ArithmeticError::OutOfRange)
}

/// Rounds to `digits` significant decimal digits and strips trailing zeros,
/// so serializing the result gives the shortest round-trip representation.
pub fn round_significant(value: Decimal, digits: u32) -> Result<Decimal, ArithmeticError> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    value
        .round_sf(digits)
        .map(|rounded| rounded.normalize())
        .ok_or(ArithmeticError::OutOfRange)
}
