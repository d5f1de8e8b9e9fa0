#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("operand `{name}` is negative; only non-negative integers can be multiplied")]
    InvalidOperand { name: &'static str },
    #[error("digit hint {hint} is smaller than the operands' digit length {required}")]
    InvalidDigitHint { hint: usize, required: usize },
    #[error("base case of {digits} digits is below the minimum of {min} needed for termination")]
    InvalidBaseCase { digits: usize, min: usize },
    #[error("decimal string has no digits")]
    EmptyDecimal,
    #[error("invalid decimal digit {found:?} at byte {position}")]
    InvalidDecimalDigit { position: usize, found: char },
}
