use super::arguments::*;
use crate::interpreter::environment::Environment;
use crate::interpreter::value::error;
use crate::interpreter::value::number::Number;
use crate::interpreter::value::procedure::{Arity, FunctionResult};
use crate::interpreter::value::Value;
use crate::term::Symbol;

macro_rules! define_unary {
    ($name:ident, $op:expr) => {
        fn $name(args: Vec<Value>) -> FunctionResult<Value> {
            let x = number(unary(&args)?)?.as_f64();
            domain_checked(&[x], $op(x))
        }
    };
}

macro_rules! define_binary {
    ($name:ident, $op:expr) => {
        fn $name(args: Vec<Value>) -> FunctionResult<Value> {
            let (x, y) = binary(&args)?;
            let (x, y) = (number(x)?.as_f64(), number(y)?.as_f64());
            domain_checked(&[x, y], $op(x, y))
        }
    };
}

macro_rules! define_integral {
    ($name:ident, $op:expr) => {
        fn $name(args: Vec<Value>) -> FunctionResult<Value> {
            match number(unary(&args)?)? {
                n @ Number::Fixnum(_) => Ok(Value::Number(n)),
                Number::Flonum(f) => Ok(Value::Number(Number::from_integral($op(f))?)),
            }
        }
    };
}

pub fn register(env: &Environment) {
    env.define(Symbol::from("pi"), Value::from(std::f64::consts::PI))
        .define(Symbol::from("e"), Value::from(std::f64::consts::E))
        .define(Symbol::from("tau"), Value::from(2.0 * std::f64::consts::PI))
        .define(Symbol::from("inf"), Value::from(f64::INFINITY))
        .define(Symbol::from("nan"), Value::from(f64::NAN));

    register_core!(env, "sqrt", sqrt, Arity::Exactly(1));
    register_core!(env, "sin", sin, Arity::Exactly(1));
    register_core!(env, "cos", cos, Arity::Exactly(1));
    register_core!(env, "tan", tan, Arity::Exactly(1));
    register_core!(env, "asin", asin, Arity::Exactly(1));
    register_core!(env, "acos", acos, Arity::Exactly(1));
    register_core!(env, "atan", atan, Arity::Exactly(1));
    register_core!(env, "exp", exp, Arity::Exactly(1));
    register_core!(env, "log", log, Arity::Between(1, 2));
    register_core!(env, "log10", log10, Arity::Exactly(1));
    register_core!(env, "log2", log2, Arity::Exactly(1));
    register_core!(env, "fabs", fabs, Arity::Exactly(1));
    register_core!(env, "degrees", degrees, Arity::Exactly(1));
    register_core!(env, "radians", radians, Arity::Exactly(1));
    register_core!(env, "floor", floor, Arity::Exactly(1));
    register_core!(env, "ceil", ceil, Arity::Exactly(1));
    register_core!(env, "trunc", trunc, Arity::Exactly(1));
    register_core!(env, "pow", pow, Arity::Exactly(2));
    register_core!(env, "atan2", atan2, Arity::Exactly(2));
    register_core!(env, "hypot", hypot, Arity::Exactly(2));
    register_core!(env, "fmod", fmod, Arity::Exactly(2));
}

// NaN out of non-NaN input means the input was outside the function's domain
fn domain_checked(inputs: &[f64], result: f64) -> FunctionResult<Value> {
    if result.is_nan() && !inputs.iter().any(|x| x.is_nan()) {
        Err(error::arithmetic_error("math domain error"))
    } else {
        Ok(Value::from(result))
    }
}

define_unary!(sqrt, f64::sqrt);
define_unary!(sin, f64::sin);
define_unary!(cos, f64::cos);
define_unary!(tan, f64::tan);
define_unary!(asin, f64::asin);
define_unary!(acos, f64::acos);
define_unary!(atan, f64::atan);
define_unary!(exp, f64::exp);
define_unary!(log10, checked_log(f64::log10));
define_unary!(log2, checked_log(f64::log2));
define_unary!(fabs, f64::abs);
define_unary!(degrees, f64::to_degrees);
define_unary!(radians, f64::to_radians);

define_integral!(floor, f64::floor);
define_integral!(ceil, f64::ceil);
define_integral!(trunc, f64::trunc);

define_binary!(pow, f64::powf);
define_binary!(atan2, f64::atan2);
define_binary!(hypot, f64::hypot);
define_binary!(fmod, |x: f64, y: f64| if y == 0.0 { f64::NAN } else { x % y });

// logarithms of non-positive numbers are domain errors, not -inf
fn checked_log(op: fn(f64) -> f64) -> impl Fn(f64) -> f64 {
    move |x| if x <= 0.0 { f64::NAN } else { op(x) }
}

fn log(args: Vec<Value>) -> FunctionResult<Value> {
    let (x, base) = unary_or_binary(&args)?;
    let x = number(x)?.as_f64();

    match base {
        None => domain_checked(&[x], checked_log(f64::ln)(x)),
        Some(base) => {
            let base = number(base)?.as_f64();
            let ln_base = checked_log(f64::ln)(base);
            if ln_base == 0.0 {
                return Err(error::arithmetic_error("division by zero"));
            }
            domain_checked(&[x, base], checked_log(f64::ln)(x) / ln_base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::error::RuntimeError;

    fn approx(v: FunctionResult<Value>, expected: f64) -> bool {
        match v {
            Ok(Value::Number(n)) => (n.as_f64() - expected).abs() < 1e-9,
            _ => false,
        }
    }

    #[test]
    fn test_unary() {
        assert_eq!(sqrt(vec![Value::from(4)]), Ok(Value::from(2.0)));
        assert!(approx(sin(vec![Value::from(0)]), 0.0));
        assert!(approx(degrees(vec![Value::from(std::f64::consts::PI)]), 180.0));
        assert!(approx(log(vec![Value::from(8), Value::from(2)]), 3.0));
        assert!(approx(log10(vec![Value::from(1000)]), 3.0));
    }

    #[test]
    fn test_domain_errors() {
        assert_matches!(sqrt(vec![Value::from(-1)]), Err(RuntimeError::ArithmeticError(_)));
        assert_matches!(log(vec![Value::from(0)]), Err(RuntimeError::ArithmeticError(_)));
        assert_matches!(log(vec![Value::from(2), Value::from(1)]), Err(RuntimeError::ArithmeticError(_)));
        assert_matches!(fmod(vec![Value::from(1), Value::from(0)]), Err(RuntimeError::ArithmeticError(_)));
        assert!(sqrt(vec![Value::from(f64::NAN)]).is_ok());
    }

    #[test]
    fn test_integral_results() {
        assert_eq!(floor(vec![Value::from(2.7)]), Ok(Value::from(2)));
        assert_eq!(ceil(vec![Value::from(2.1)]), Ok(Value::from(3)));
        assert_eq!(trunc(vec![Value::from(-2.7)]), Ok(Value::from(-2)));
        assert_eq!(floor(vec![Value::from(5)]), Ok(Value::from(5)));
        assert!(floor(vec![Value::from(f64::NAN)]).is_err());
        assert_matches!(
            floor(vec![Value::from(9_223_372_036_854_775_808.0)]),
            Err(RuntimeError::ArithmeticError(_))
        );
    }

    #[test]
    fn test_binary() {
        assert_eq!(pow(vec![Value::from(2), Value::from(10)]), Ok(Value::from(1024.0)));
        assert_eq!(hypot(vec![Value::from(3), Value::from(4)]), Ok(Value::from(5.0)));
        assert_eq!(fmod(vec![Value::from(7), Value::from(3)]), Ok(Value::from(1.0)));
    }
}
