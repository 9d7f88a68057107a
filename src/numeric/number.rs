// ============================================================================
// Number
// Tagged integer / floating-point value with explicit promotion rules
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric value that is either an exact integer or a floating-point number.
///
/// Promotion rules:
/// - `Int op Int` stays `Int` for add/subtract/multiply, unless the result
///   does not fit in an `i64`, in which case it is computed as `Float`.
/// - Any `Float` operand makes the result `Float`.
///
/// Equality and ordering are numeric across variants, so `Int(5)` equals
/// `Float(5.0)`. Use [`Number::is_int`] / [`Number::is_float`] to inspect the
/// variant itself.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// Exact 64-bit integer
    Int(i64),
    /// IEEE-754 double
    Float(f64),
}

/// 2^63 as f64, the first float above `i64::MAX`
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Number {
    /// Integer zero, the initial `last_result` of a calculator
    pub const ZERO: Self = Number::Int(0);

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Value as `f64` (lossy for integers above 2^53).
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// True for `Int(0)`, `Float(0.0)` and `Float(-0.0)`.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Number::Int(v) => v < 0,
            Number::Float(v) => v < 0.0,
        }
    }

    /// Whether the value has no fractional part (every `Int`, and finite
    /// floats such as `2.0`).
    #[inline]
    pub fn is_integral(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(v) => v.is_finite() && v.fract() == 0.0,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(v) => v.is_finite(),
        }
    }
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through `f64`.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_UPPER_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I64_UPPER_BOUND {
        return Some(Ordering::Greater);
    }

    let truncated = float.trunc();
    match int.cmp(&(truncated as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - truncated)),
        ordering => Some(ordering),
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" so floats stay distinguishable
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

// ============================================================================
// Infallible arithmetic with promotion
// ============================================================================

impl Add for Number {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Number::Float(a as f64 + b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map_or_else(|| Number::Float(a as f64 - b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map_or_else(|| Number::Float(a as f64 * b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Number::Int(v) => v
                .checked_neg()
                .map_or_else(|| Number::Float(-(v as f64)), Number::Int),
            Number::Float(v) => Number::Float(-v),
        }
    }
}
