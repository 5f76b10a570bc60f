use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{ArithmeticError, BinaryOperator, Operand, apply, round_significant};
use crate::error::{CalcError, CalcResult};

/// Tuning for digit entry and result precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPolicy {
    /// Maximum significant characters accepted during entry. Sign and decimal
    /// point are excluded from the count.
    #[serde(default = "default_max_entry_digits")]
    pub max_entry_digits: usize,
    /// Significant decimal digits kept when a computed result is
    /// re-serialized for display.
    #[serde(default = "default_result_significant_digits")]
    pub result_significant_digits: u32,
}

impl Default for EntryPolicy {
    fn default() -> Self {
        Self {
            max_entry_digits: default_max_entry_digits(),
            result_significant_digits: default_result_significant_digits(),
        }
    }
}

fn default_max_entry_digits() -> usize {
    15
}

fn default_result_significant_digits() -> u32 {
    12
}

impl EntryPolicy {
    pub fn validate(self) -> CalcResult<()> {
        if self.max_entry_digits == 0 {
            return Err(CalcError::InvalidEntryPolicy(
                "max_entry_digits must be at least 1".to_owned(),
            ));
        }
        if self.result_significant_digits == 0 || self.result_significant_digits > 28 {
            return Err(CalcError::InvalidEntryPolicy(
                "result_significant_digits must be in 1..=28".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Conceptual phase of the flat input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    OperandPending,
    OperatorPending,
    JustEvaluated,
    Error,
}

/// The whole calculator state: one entry in progress, at most one held
/// operand with its pending operator, and two mutually exclusive flags.
///
/// Error is terminal until `clear`: while `error` is set every event except
/// `clear` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    policy: EntryPolicy,
    current: Operand,
    previous: Option<Operand>,
    operator: Option<BinaryOperator>,
    just_evaluated: bool,
    pending_new_operand: bool,
    expression: String,
    error: Option<ArithmeticError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(EntryPolicy::default())
    }
}

impl CalculatorState {
    #[must_use]
    pub fn new(policy: EntryPolicy) -> Self {
        Self {
            policy,
            current: Operand::zero(),
            previous: None,
            operator: None,
            just_evaluated: false,
            pending_new_operand: false,
            expression: String::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn policy(&self) -> EntryPolicy {
        self.policy
    }

    #[must_use]
    pub fn current(&self) -> &Operand {
        &self.current
    }

    #[must_use]
    pub fn previous(&self) -> Option<&Operand> {
        self.previous.as_ref()
    }

    #[must_use]
    pub fn operator(&self) -> Option<BinaryOperator> {
        self.operator
    }

    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    #[must_use]
    pub fn pending_new_operand(&self) -> bool {
        self.pending_new_operand
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn error(&self) -> Option<ArithmeticError> {
        self.error
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.just_evaluated {
            Phase::JustEvaluated
        } else if self.pending_new_operand {
            Phase::OperatorPending
        } else if self.operator.is_some() || self.previous.is_some() || !self.current.is_zero_entry()
        {
            Phase::OperandPending
        } else {
            Phase::Idle
        }
    }

    /// Enters one digit.
    ///
    /// Right after equals the digit starts a fresh operand and drops the
    /// resolved expression text. Right after an operator it replaces the
    /// carried-over entry instead of appending to it.
    pub fn press_digit(&mut self, digit: char) {
        if self.error.is_some() {
            return;
        }
        if !digit.is_ascii_digit() {
            warn!(input = %digit, "rejecting non-digit entry payload");
            return;
        }

        if self.just_evaluated {
            self.current = Operand::from_digit(digit);
            self.expression.clear();
            self.just_evaluated = false;
        } else if self.pending_new_operand {
            self.current = Operand::from_digit(digit);
            self.pending_new_operand = false;
        } else if self.current.is_zero_entry() {
            self.current = Operand::from_digit(digit);
        } else if !self.current.push_digit(digit, self.policy.max_entry_digits) {
            trace!(
                cap = self.policy.max_entry_digits,
                "entry cap reached, digit rejected"
            );
        }
    }

    /// Enters the decimal point. Right after equals the entry restarts as
    /// `"0."`; otherwise the point is appended only when none is present.
    pub fn press_decimal(&mut self) {
        if self.error.is_some() {
            return;
        }
        if self.just_evaluated {
            let mut fresh = Operand::zero();
            fresh.push_decimal_point();
            self.current = fresh;
            self.just_evaluated = false;
            return;
        }
        self.current.push_decimal_point();
    }

    /// Chooses an operator, resolving any already-pending operation first
    /// (left-to-right chaining). Division by zero aborts the event and enters
    /// the error state.
    pub fn press_operator(&mut self, op: BinaryOperator) {
        if self.error.is_some() {
            return;
        }

        match (self.operator, self.previous.clone()) {
            (Some(pending), Some(prev)) if !self.just_evaluated => {
                match self.resolve(&prev, pending) {
                    Ok(result) => {
                        let resolved = Operand::from_decimal(result);
                        debug!(result = %resolved, chained = %pending.symbol(), "resolved chain");
                        self.previous = Some(resolved.clone());
                        self.current = resolved;
                    }
                    Err(err) => {
                        self.enter_error(err);
                        return;
                    }
                }
            }
            _ => {
                self.previous = Some(self.current.clone());
            }
        }

        self.operator = Some(op);
        if let Some(prev) = &self.previous {
            self.expression = format!("{} {}", prev.as_str(), op.symbol());
        }
        self.just_evaluated = false;
        self.pending_new_operand = true;
    }

    /// Resolves the pending operation. A no-op when nothing is pending, so a
    /// repeated equals never re-applies the operator.
    pub fn press_equals(&mut self) {
        if self.error.is_some() {
            return;
        }
        let (Some(op), Some(prev)) = (self.operator, self.previous.clone()) else {
            return;
        };

        let full = format!("{} {} {} =", prev.as_str(), op.symbol(), self.current.as_str());
        match self.resolve(&prev, op) {
            Ok(result) => {
                self.expression = full;
                self.current = Operand::from_decimal(result);
                self.previous = None;
                self.operator = None;
                self.just_evaluated = true;
                self.pending_new_operand = false;
                debug!(result = %self.current, "evaluated expression");
            }
            Err(err) => self.enter_error(err),
        }
    }

    /// Unconditional reset to the default state, including from error.
    pub fn clear(&mut self) {
        *self = Self::new(self.policy);
    }

    /// Toggles the leading negation marker. Ignored on the untouched `"0"`.
    pub fn toggle_sign(&mut self) {
        if self.error.is_some() || self.current.is_zero_entry() {
            return;
        }
        self.current.toggle_sign();
    }

    /// Divides the entry by one hundred.
    ///
    /// Operates on the entry only: a held operand and pending operator are
    /// left untouched, matching the reference widget.
    pub fn percent(&mut self) {
        if self.error.is_some() {
            return;
        }
        let scaled = self.current.to_decimal() / Decimal::ONE_HUNDRED;
        match round_significant(scaled, self.policy.result_significant_digits) {
            Ok(value) => self.current = Operand::from_decimal(value),
            Err(err) => self.enter_error(err),
        }
    }

    /// Drops the last entered character. In error or right after equals this
    /// degenerates to a full clear.
    pub fn backspace(&mut self) {
        if self.error.is_some() || self.just_evaluated {
            self.clear();
            return;
        }
        self.current.backspace();
    }

    fn resolve(&self, prev: &Operand, op: BinaryOperator) -> Result<Decimal, ArithmeticError> {
        let raw = apply(prev.to_decimal(), self.current.to_decimal(), op)?;
        round_significant(raw, self.policy.result_significant_digits)
    }

    fn enter_error(&mut self, err: ArithmeticError) {
        debug!(error = %err, "entering error state");
        self.current = Operand::zero();
        self.previous = None;
        self.operator = None;
        self.just_evaluated = false;
        self.pending_new_operand = false;
        self.expression.clear();
        self.error = Some(err);
    }
}
