pub mod arithmetic;
pub mod operand;

pub use arithmetic::{ArithmeticError, BinaryOperator, apply, round_significant};
pub use operand::Operand;
