use crate::core::BinaryOperator;

use super::InputEvent;

/// Maps a keyboard key name to an input event.
///
/// Covers the reference widget's bindings: digits, `.` and `,` for the
/// decimal point, `+ - * x /` for operators, `Enter` and `=` for equals,
/// `Backspace`, `Escape` and `Delete` for clear, `%` for percent. Sign toggle
/// has no key binding. Returns `None` for unmapped keys so hosts can let
/// those fall through.
#[must_use]
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    let event = match key {
        "." | "," => InputEvent::Decimal,
        "+" => InputEvent::Operator(BinaryOperator::Add),
        "-" => InputEvent::Operator(BinaryOperator::Subtract),
        "*" | "x" => InputEvent::Operator(BinaryOperator::Multiply),
        "/" => InputEvent::Operator(BinaryOperator::Divide),
        "Enter" | "=" => InputEvent::Equals,
        "Backspace" => InputEvent::Backspace,
        "Escape" | "Delete" => InputEvent::Clear,
        "%" => InputEvent::Percent,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) if digit.is_ascii_digit() => InputEvent::Digit(digit),
                _ => return None,
            }
        }
    };
    Some(event)
}
