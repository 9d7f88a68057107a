// ============================================================================
// Calculation Errors
// Error types for arithmetic engine operations
// ============================================================================

use super::Number;
use std::fmt;

/// The two error kinds an operation can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DivisionByZero,
    InvalidOperation,
}

/// Reason an operation was rejected as invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidOperation {
    /// Negative base with a non-integral exponent has no real result
    NegativeBaseFractionalExponent { base: Number, exponent: Number },
    /// Result was NaN or infinite
    NonFiniteResult { operation: &'static str },
    /// Magnitude does not fit the numeric representation
    Overflow { operation: &'static str },
    /// Square root of a negative number
    NegativeSquareRoot { value: Number },
    /// Wrong number of operands for a dispatched operation
    ArityMismatch {
        operation: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Errors that can occur during calculator operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Attempted division by exactly zero
    DivisionByZero { dividend: Number },
    /// Operation has no valid numeric result
    InvalidOperation(InvalidOperation),
}

impl CalcError {
    /// Coarse kind, for callers that only distinguish the two error classes.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            CalcError::InvalidOperation(_) => ErrorKind::InvalidOperation,
        }
    }

    pub fn is_division_by_zero(&self) -> bool {
        self.kind() == ErrorKind::DivisionByZero
    }

    pub fn is_invalid_operation(&self) -> bool {
        self.kind() == ErrorKind::InvalidOperation
    }
}

impl From<InvalidOperation> for CalcError {
    fn from(reason: InvalidOperation) -> Self {
        CalcError::InvalidOperation(reason)
    }
}

impl fmt::Display for InvalidOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidOperation::NegativeBaseFractionalExponent { base, exponent } => write!(
                f,
                "cannot raise negative number {} to non-integer power {}",
                base, exponent
            ),
            InvalidOperation::NonFiniteResult { operation } => {
                write!(f, "{} resulted in an invalid number", operation)
            },
            InvalidOperation::Overflow { operation } => {
                write!(f, "{} resulted in overflow", operation)
            },
            InvalidOperation::NegativeSquareRoot { value } => {
                write!(f, "cannot calculate square root of negative number {}", value)
            },
            InvalidOperation::ArityMismatch {
                operation,
                expected,
                got,
            } => write!(
                f,
                "{} expects {} operand(s), got {}",
                operation, expected, got
            ),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero { dividend } => {
                write!(f, "division by zero: cannot divide {} by zero", dividend)
            },
            CalcError::InvalidOperation(reason) => write!(f, "invalid operation: {}", reason),
        }
    }
}

impl std::error::Error for InvalidOperation {}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::InvalidOperation(reason) => Some(reason),
            CalcError::DivisionByZero { .. } => None,
        }
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
