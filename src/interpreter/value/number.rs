use super::error::{self, RuntimeError};
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, RuntimeError>;

/// Integer or floating point number.
///
/// `PartialEq` is structural (`1` and `1.0` differ), which is what the reader
/// tests rely on. Numeric comparison across representations goes through
/// `numeric_eq` and `numeric_cmp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Fixnum(i64),
    Flonum(f64),
}

impl Number {
    pub fn fixnum(n: i64) -> Self {
        Number::Fixnum(n)
    }

    pub fn flonum(n: f64) -> Self {
        Number::Flonum(n)
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Fixnum(n) => *n as f64,
            Number::Flonum(n) => *n,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Fixnum(n) => *n == 0,
            Number::Flonum(n) => *n == 0.0,
        }
    }

    /// Convert an integral float into a fixnum.
    ///
    /// `i64::MAX as f64` rounds up to 2^63, which is already out of range.
    pub fn from_integral(n: f64) -> Result<Self> {
        if n.is_finite() && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Ok(Number::Fixnum(n as i64))
        } else {
            Err(error::arithmetic_error(format!(
                "cannot convert {} to an integer",
                n
            )))
        }
    }

    pub fn add(self, rhs: Number) -> Result<Number> {
        self.combine(rhs, i64::checked_add, |l, r| l + r)
    }

    pub fn sub(self, rhs: Number) -> Result<Number> {
        self.combine(rhs, i64::checked_sub, |l, r| l - r)
    }

    pub fn mul(self, rhs: Number) -> Result<Number> {
        self.combine(rhs, i64::checked_mul, |l, r| l * r)
    }

    /// True division, the result is always a float.
    pub fn div(self, rhs: Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(error::arithmetic_error("division by zero"));
        }
        Ok(Number::Flonum(self.as_f64() / rhs.as_f64()))
    }

    pub fn abs(self) -> Result<Number> {
        match self {
            Number::Fixnum(n) => n
                .checked_abs()
                .map(Number::Fixnum)
                .ok_or_else(|| error::arithmetic_error("integer overflow")),
            Number::Flonum(n) => Ok(Number::Flonum(n.abs())),
        }
    }

    pub fn numeric_eq(&self, rhs: &Number) -> bool {
        match (self, rhs) {
            (Number::Fixnum(l), Number::Fixnum(r)) => l == r,
            _ => self.as_f64() == rhs.as_f64(),
        }
    }

    pub fn numeric_cmp(&self, rhs: &Number) -> Option<Ordering> {
        match (self, rhs) {
            (Number::Fixnum(l), Number::Fixnum(r)) => Some(l.cmp(r)),
            _ => self.as_f64().partial_cmp(&rhs.as_f64()),
        }
    }

    #[inline]
    fn combine<I, F>(self, rhs: Number, int_op: I, float_op: F) -> Result<Number>
    where
        I: Fn(i64, i64) -> Option<i64>,
        F: Fn(f64, f64) -> f64,
    {
        match (self, rhs) {
            (Number::Fixnum(l), Number::Fixnum(r)) => int_op(l, r)
                .map(Number::Fixnum)
                .ok_or_else(|| error::arithmetic_error("integer overflow")),
            (l, r) => Ok(Number::Flonum(float_op(l.as_f64(), r.as_f64()))),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Fixnum(i64::from(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Fixnum(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Flonum(n)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Fixnum(n) => write!(f, "{}", n),
            // the debug representation always keeps a fraction or an exponent,
            // so the output reads back as a float
            Number::Flonum(n) => write!(f, "{:?}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixnum_arithmetic() {
        assert_eq!(Number::fixnum(2).add(Number::fixnum(3)), Ok(Number::fixnum(5)));
        assert_eq!(Number::fixnum(2).sub(Number::fixnum(3)), Ok(Number::fixnum(-1)));
        assert_eq!(Number::fixnum(2).mul(Number::fixnum(3)), Ok(Number::fixnum(6)));
    }

    #[test]
    fn test_mixed_arithmetic_promotes() {
        assert_eq!(Number::fixnum(2).add(Number::flonum(0.5)), Ok(Number::flonum(2.5)));
        assert_eq!(Number::flonum(1.5).mul(Number::fixnum(2)), Ok(Number::flonum(3.0)));
    }

    #[test]
    fn test_division_is_true_division() {
        assert_eq!(Number::fixnum(1).div(Number::fixnum(2)), Ok(Number::flonum(0.5)));
        assert_eq!(Number::fixnum(4).div(Number::fixnum(2)), Ok(Number::flonum(2.0)));
        assert!(matches!(
            Number::fixnum(1).div(Number::fixnum(0)),
            Err(RuntimeError::ArithmeticError(_))
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            Number::fixnum(i64::MAX).add(Number::fixnum(1)),
            Err(RuntimeError::ArithmeticError(_))
        ));
        assert!(Number::fixnum(i64::MIN).abs().is_err());
    }

    #[test]
    fn test_from_integral_range() {
        assert_eq!(Number::from_integral(-9.0), Ok(Number::fixnum(-9)));
        assert_eq!(
            Number::from_integral(i64::MIN as f64),
            Ok(Number::fixnum(i64::MIN))
        );
        // 2^63 is one past i64::MAX
        assert!(Number::from_integral(9_223_372_036_854_775_808.0).is_err());
        assert!(Number::from_integral(f64::INFINITY).is_err());
    }

    #[test]
    fn test_numeric_comparison() {
        assert!(Number::fixnum(1).numeric_eq(&Number::flonum(1.0)));
        assert_ne!(Number::fixnum(1), Number::flonum(1.0));
        assert_eq!(
            Number::fixnum(1).numeric_cmp(&Number::flonum(1.5)),
            Some(Ordering::Less)
        );
        assert_eq!(Number::flonum(f64::NAN).numeric_cmp(&Number::fixnum(1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::fixnum(-7).to_string(), "-7");
        assert_eq!(Number::flonum(2.0).to_string(), "2.0");
        assert_eq!(Number::flonum(3.5).to_string(), "3.5");
    }
}
