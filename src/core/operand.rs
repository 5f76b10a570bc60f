use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// String-encoded decimal operand, exactly as entered.
///
/// Entry is kept as text rather than a number because mid-entry shapes have
/// no numeric representation: `"0."`, `"1.50"`, `"-0."` after a sign toggle.
/// Every edit method keeps the text parseable as a decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Default for Operand {
    fn default() -> Self {
        Self("0".to_owned())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Operand {
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Starts a fresh operand from one entered digit.
    ///
    /// The caller is responsible for only passing ASCII digits here.
    #[must_use]
    pub fn from_digit(digit: char) -> Self {
        Self(digit.to_string())
    }

    /// Re-serializes a computed result. Zero always becomes `"0"`, so a
    /// negative zero can never leak into the entry text.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        if value.is_zero() {
            return Self::zero();
        }
        Self(value.normalize().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the untouched default entry `"0"` only, not for `"0."`.
    #[must_use]
    pub fn is_zero_entry(&self) -> bool {
        self.0 == "0"
    }

    /// Count of digit characters; sign and decimal point are excluded.
    #[must_use]
    pub fn significant_digits(&self) -> usize {
        self.0.chars().filter(char::is_ascii_digit).count()
    }

    /// Appends one digit, enforcing the significant-digit cap.
    ///
    /// Returns `false` when the append was rejected and the entry unchanged.
    pub fn push_digit(&mut self, digit: char, max_significant: usize) -> bool {
        if !digit.is_ascii_digit() || self.significant_digits() >= max_significant {
            return false;
        }
        self.0.push(digit);
        true
    }

    /// Appends a decimal point unless one is already present.
    pub fn push_decimal_point(&mut self) -> bool {
        if self.0.contains('.') {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Toggles the leading negation marker.
    pub fn toggle_sign(&mut self) {
        match self.0.strip_prefix('-') {
            Some(rest) => self.0 = rest.to_owned(),
            None => self.0.insert(0, '-'),
        }
    }

    /// Drops the last entered character, collapsing to `"0"` when nothing
    /// beyond a bare negation marker remains.
    pub fn backspace(&mut self) {
        self.0.pop();
        if self.0.is_empty() || self.0 == "-" {
            self.0 = "0".to_owned();
        }
    }

    /// Parses the entry as an exact decimal.
    ///
    /// A trailing decimal point mid-entry is valid and ignored. Edit methods
    /// only produce parseable text; zero is the total-function fallback.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_str(self.0.trim_end_matches('.')).unwrap_or(Decimal::ZERO)
    }
}
