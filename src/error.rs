use core::fmt;

/// The vector operation that refused a zero-length input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Normalize,
    /// Covers both `angle_between` and `angle`
    Angle,
}

/// Raised when an operation needs a vector of nonzero length but the
/// length (or product of lengths) is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroLengthError {
    pub operation: Operation,
}

impl ZeroLengthError {
    pub fn new(operation: Operation) -> Self {
        ZeroLengthError { operation }
    }
}

impl fmt::Display for ZeroLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Operation::Normalize => f.write_str("cannot normalize a zero-length vector"),
            Operation::Angle => f.write_str("cannot calculate angle with zero-length vector"),
        }
    }
}

impl core::error::Error for ZeroLengthError {}
