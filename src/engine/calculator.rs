// ============================================================================
// Calculator
// Arithmetic engine holding the last computed result
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{CalcError, CalcResult, InvalidOperation, Number};

/// Arithmetic engine.
///
/// Every operation is pure apart from `last_result`, which is updated after
/// each successful call and left untouched when a call fails.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    last_result: Number,
}

impl Calculator {
    /// Create a calculator with `last_result` at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        Ok(self.store(a.into() + b.into()))
    }

    pub fn subtract(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        Ok(self.store(a.into() - b.into()))
    }

    pub fn multiply(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        Ok(self.store(a.into() * b.into()))
    }

    /// Divide `a` by `b`. The quotient is always a float.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `b` is zero.
    pub fn divide(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        if b.is_zero() {
            return Err(CalcError::DivisionByZero { dividend: a });
        }
        Ok(self.store(Number::Float(a.as_f64() / b.as_f64())))
    }

    /// Raise `base` to `exponent`.
    ///
    /// Integer powers with a non-negative exponent stay exact while the result
    /// fits in an `i64`.
    ///
    /// # Errors
    /// Returns `InvalidOperation` when the base is negative and the exponent
    /// is a float (even one without a fractional part), when the result is
    /// NaN or infinite, or when the magnitude overflows.
    pub fn power(
        &mut self,
        base: impl Into<Number>,
        exponent: impl Into<Number>,
    ) -> CalcResult<Number> {
        let (base, exponent) = (base.into(), exponent.into());
        if base.is_negative() && !exponent.is_int() {
            return Err(InvalidOperation::NegativeBaseFractionalExponent { base, exponent }.into());
        }

        let raw = raw_power(base, exponent);
        let result = check_power(raw, base, exponent)?;
        Ok(self.store(result))
    }

    /// Non-negative square root, always a float.
    ///
    /// # Errors
    /// Returns `InvalidOperation` when `value` is negative.
    pub fn square_root(&mut self, value: impl Into<Number>) -> CalcResult<Number> {
        let value = value.into();
        if value.is_negative() {
            return Err(InvalidOperation::NegativeSquareRoot { value }.into());
        }
        Ok(self.store(Number::Float(value.as_f64().sqrt())))
    }

    /// Dispatch `operation` over a slice of operands.
    ///
    /// # Errors
    /// Returns `InvalidOperation` when the operand count does not match the
    /// operation's arity, otherwise whatever the operation itself returns.
    pub fn apply(&mut self, operation: Operation, operands: &[Number]) -> CalcResult<Number> {
        match (operation, operands) {
            (Operation::Add, &[a, b]) => self.add(a, b),
            (Operation::Subtract, &[a, b]) => self.subtract(a, b),
            (Operation::Multiply, &[a, b]) => self.multiply(a, b),
            (Operation::Divide, &[a, b]) => self.divide(a, b),
            (Operation::Power, &[a, b]) => self.power(a, b),
            (Operation::SquareRoot, &[a]) => self.square_root(a),
            _ => Err(InvalidOperation::ArityMismatch {
                operation: operation.as_str(),
                expected: operation.arity(),
                got: operands.len(),
            }
            .into()),
        }
    }

    pub fn get_last_result(&self) -> Number {
        self.last_result
    }

    /// Reset `last_result` to zero
    pub fn clear(&mut self) {
        self.last_result = Number::ZERO;
    }

    #[inline]
    fn store(&mut self, result: Number) -> Number {
        self.last_result = result;
        result
    }
}

/// Unchecked power; integer results fall back to float when they overflow.
fn raw_power(base: Number, exponent: Number) -> Number {
    match (base, exponent) {
        (Number::Int(b), Number::Int(e)) if e >= 0 => u32::try_from(e)
            .ok()
            .and_then(|e| b.checked_pow(e))
            .map_or_else(|| Number::Float((b as f64).powf(e as f64)), Number::Int),
        (b, e) => Number::Float(b.as_f64().powf(e.as_f64())),
    }
}

fn check_power(raw: Number, base: Number, exponent: Number) -> CalcResult<Number> {
    const OPERATION: &str = "power";

    match raw {
        Number::Float(v) if v.is_nan() => {
            Err(InvalidOperation::NonFiniteResult { operation: OPERATION }.into())
        },
        // Finite, non-zero inputs going infinite is a magnitude overflow
        Number::Float(v) if v.is_infinite() => {
            if base.is_finite() && exponent.is_finite() && !base.is_zero() {
                Err(InvalidOperation::Overflow { operation: OPERATION }.into())
            } else {
                Err(InvalidOperation::NonFiniteResult { operation: OPERATION }.into())
            }
        },
        value => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(Calculator::new().get_last_result(), Number::Int(0));
    }

    #[test]
    fn test_basic_operations() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(2, 3).unwrap(), Number::Int(5));
        assert_eq!(calc.subtract(10, 4).unwrap(), Number::Int(6));
        assert_eq!(calc.multiply(-3, 4).unwrap(), Number::Int(-12));
        assert_eq!(calc.add(0.1, 0.2).unwrap(), Number::Float(0.1 + 0.2));
    }

    #[test]
    fn test_integer_results_stay_integers() {
        let mut calc = Calculator::new();
        assert!(calc.add(2, 3).unwrap().is_int());
        assert!(calc.multiply(6, 7).unwrap().is_int());
        assert!(calc.power(2, 10).unwrap().is_int());
        assert!(calc.add(2, 3.0).unwrap().is_float());
    }

    #[test]
    fn test_divide_promotes_to_float() {
        let mut calc = Calculator::new();
        let result = calc.divide(10, 2).unwrap();
        assert!(result.is_float());
        assert_eq!(result, Number::Float(5.0));
        assert_eq!(calc.divide(45, 2).unwrap(), Number::Float(22.5));
    }

    #[test]
    fn test_divide_by_zero() {
        let mut calc = Calculator::new();
        calc.add(1, 1).unwrap();

        for zero in [Number::Int(0), Number::Float(0.0), Number::Float(-0.0)] {
            let err = calc.divide(10, zero).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        }
        // Failure leaves the previous result in place
        assert_eq!(calc.get_last_result(), Number::Int(2));
    }

    #[test]
    fn test_power() {
        let mut calc = Calculator::new();
        assert_eq!(calc.power(2, 3).unwrap(), Number::Int(8));
        assert_eq!(calc.power(-2, 3).unwrap(), Number::Int(-8));
        assert_eq!(calc.power(4, 0.5).unwrap(), Number::Float(2.0));
        assert_eq!(calc.power(2, -1).unwrap(), Number::Float(0.5));
        assert_eq!(calc.power(-2.0, 3).unwrap(), Number::Float(-8.0));
    }

    #[test]
    fn test_power_negative_base_float_exponent() {
        let mut calc = Calculator::new();
        calc.add(1, 1).unwrap();

        // A float exponent is rejected even when it has no fractional part
        let err = calc.power(-8, 2.0).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidOperation(InvalidOperation::NegativeBaseFractionalExponent {
                base: Number::Int(-8),
                exponent: Number::Float(2.0),
            })
        );
        assert_eq!(calc.power(-2, -1.0).unwrap_err().kind(), ErrorKind::InvalidOperation);
        assert_eq!(calc.get_last_result(), Number::Int(2));
    }

    #[test]
    fn test_power_large_int_falls_back_to_float() {
        let mut calc = Calculator::new();
        let result = calc.power(2, 100).unwrap();
        assert!(result.is_float());
        assert_eq!(result.as_f64(), 2f64.powi(100));
    }

    #[test]
    fn test_power_negative_base_fractional_exponent() {
        let mut calc = Calculator::new();
        let err = calc.power(-8, 0.5).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidOperation(InvalidOperation::NegativeBaseFractionalExponent {
                base: Number::Int(-8),
                exponent: Number::Float(0.5),
            })
        );
        assert_eq!(calc.get_last_result(), Number::Int(0));
    }

    #[test]
    fn test_power_overflow() {
        let mut calc = Calculator::new();
        calc.add(1, 2).unwrap();

        let err = calc.power(10.0, 400).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidOperation(InvalidOperation::Overflow { operation: "power" })
        );
        let err = calc.power(10, 400).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);

        assert_eq!(calc.get_last_result(), Number::Int(3));
    }

    #[test]
    fn test_power_non_finite() {
        let mut calc = Calculator::new();
        let err = calc.power(0, -1).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidOperation(InvalidOperation::NonFiniteResult { operation: "power" })
        );
        assert!(calc.power(f64::INFINITY, 2).is_err());
        assert!(calc.power(2, f64::NAN).is_err());
    }

    #[test]
    fn test_square_root() {
        let mut calc = Calculator::new();
        assert_eq!(calc.square_root(16).unwrap(), Number::Float(4.0));
        assert!(calc.square_root(16).unwrap().is_float());
        assert_eq!(calc.square_root(0).unwrap(), Number::Float(0.0));
        assert_eq!(calc.get_last_result(), Number::Float(0.0));

        let err = calc.square_root(-4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid operation: cannot calculate square root of negative number -4"
        );
    }

    #[test]
    fn test_last_result_and_clear() {
        let mut calc = Calculator::new();
        calc.multiply(6, 7).unwrap();
        assert_eq!(calc.get_last_result(), Number::Int(42));
        calc.square_root(81).unwrap();
        assert_eq!(calc.get_last_result(), Number::Float(9.0));

        calc.clear();
        assert_eq!(calc.get_last_result(), Number::Int(0));
        assert!(calc.get_last_result().is_int());
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = Calculator::new();
        let mut second = Calculator::new();
        first.add(5, 5).unwrap();
        second.multiply(3, 3).unwrap();

        assert_eq!(first.get_last_result(), Number::Int(10));
        assert_eq!(second.get_last_result(), Number::Int(9));

        first.clear();
        assert_eq!(second.get_last_result(), Number::Int(9));
    }

    #[test]
    fn test_apply() {
        let mut calc = Calculator::new();
        assert_eq!(
            calc.apply(Operation::Power, &[Number::Int(3), Number::Int(2)])
                .unwrap(),
            Number::Int(9)
        );
        assert_eq!(
            calc.apply(Operation::SquareRoot, &[Number::Int(9)]).unwrap(),
            Number::Float(3.0)
        );

        let err = calc.apply(Operation::Add, &[Number::Int(1)]).unwrap_err();
        assert_eq!(err.to_string(), "invalid operation: add expects 2 operand(s), got 1");
        assert_eq!(calc.get_last_result(), Number::Float(3.0));
    }

    proptest! {
        #[test]
        fn prop_divide_then_multiply_round_trips(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assume!(b.abs() > 1e-6);
            let mut calc = Calculator::new();
            let quotient = calc.divide(a, b).unwrap().as_f64();
            prop_assert!(approx_eq(quotient * b, a));
        }

        #[test]
        fn prop_divide_by_zero_always_fails(a in any::<i64>()) {
            let mut calc = Calculator::new();
            let err = calc.divide(a, 0).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::DivisionByZero);
            prop_assert_eq!(calc.get_last_result(), Number::Int(0));
        }

        #[test]
        fn prop_square_root_of_negative_fails(n in -1e12f64..-1e-12) {
            let mut calc = Calculator::new();
            prop_assert_eq!(calc.square_root(n).unwrap_err().kind(), ErrorKind::InvalidOperation);
        }

        #[test]
        fn prop_square_root_squared(n in 0f64..1e12) {
            let mut calc = Calculator::new();
            let root = calc.square_root(n).unwrap().as_f64();
            prop_assert!(root >= 0.0);
            prop_assert!(approx_eq(root * root, n));
        }

        #[test]
        fn prop_negative_base_fractional_exponent_fails(
            base in -1e3f64..-1e-3,
            exponent in -10f64..10f64
        ) {
            prop_assume!(exponent.fract() != 0.0);
            let mut calc = Calculator::new();
            prop_assert_eq!(
                calc.power(base, exponent).unwrap_err().kind(),
                ErrorKind::InvalidOperation
            );
        }

        #[test]
        fn prop_last_result_tracks_success(a in any::<i32>(), b in any::<i32>()) {
            let mut calc = Calculator::new();
            let sum = calc.add(a, b).unwrap();
            prop_assert_eq!(calc.get_last_result(), sum);
            let product = calc.multiply(a, b).unwrap();
            prop_assert_eq!(calc.get_last_result(), product);
            calc.clear();
            prop_assert_eq!(calc.get_last_result(), Number::Int(0));
        }
    }
}
