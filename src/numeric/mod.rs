// ============================================================================
// Numeric Module
// Tagged numeric values and calculation errors
// ============================================================================
//
// This module provides:
// - Number: integer/float value with explicit promotion rules
// - CalcError: Error types for arithmetic operations
//
// Design principles:
// - Fallible operations return Result (no panics)
// - Integer results stay exact while they fit in i64
// - Division and square root always produce floats

mod errors;
mod number;

pub use errors::{CalcError, CalcResult, ErrorKind, InvalidOperation};
pub use number::Number;
