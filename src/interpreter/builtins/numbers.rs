use super::arguments::*;
use crate::interpreter::environment::Environment;
use crate::interpreter::value::equality::Equality;
use crate::interpreter::value::error;
use crate::interpreter::value::number::Number;
use crate::interpreter::value::procedure::{Arity, FunctionResult};
use crate::interpreter::value::Value;
use std::cmp::Ordering;

macro_rules! define_comparison {
    ($name:ident, $pred:expr) => {
        fn $name(args: Vec<Value>) -> FunctionResult<Value> {
            let (lhs, rhs) = binary(&args)?;
            let ordering = number(lhs)?.numeric_cmp(&number(rhs)?);
            Ok(Value::Bool(ordering.map_or(false, $pred)))
        }
    };
}

pub fn register(env: &Environment) {
    register_core!(env, "+", add, Arity::Exactly(2));
    register_core!(env, "-", sub, Arity::Exactly(2));
    register_core!(env, "*", mul, Arity::Exactly(2));
    register_core!(env, "/", div, Arity::Exactly(2));
    register_core!(env, ">", gt, Arity::Exactly(2));
    register_core!(env, "<", lt, Arity::Exactly(2));
    register_core!(env, ">=", ge, Arity::Exactly(2));
    register_core!(env, "<=", le, Arity::Exactly(2));
    register_core!(env, "=", num_eq, Arity::Exactly(2));
    register_core!(env, "abs", abs, Arity::Exactly(1));
    register_core!(env, "max", max, Arity::AtLeast(1));
    register_core!(env, "min", min, Arity::AtLeast(1));
    register_core!(env, "round", round, Arity::Between(1, 2));
}

fn add(args: Vec<Value>) -> FunctionResult<Value> {
    let (lhs, rhs) = binary(&args)?;
    Ok(Value::Number(number(lhs)?.add(number(rhs)?)?))
}

fn sub(args: Vec<Value>) -> FunctionResult<Value> {
    let (lhs, rhs) = binary(&args)?;
    Ok(Value::Number(number(lhs)?.sub(number(rhs)?)?))
}

fn mul(args: Vec<Value>) -> FunctionResult<Value> {
    let (lhs, rhs) = binary(&args)?;
    Ok(Value::Number(number(lhs)?.mul(number(rhs)?)?))
}

fn div(args: Vec<Value>) -> FunctionResult<Value> {
    let (lhs, rhs) = binary(&args)?;
    Ok(Value::Number(number(lhs)?.div(number(rhs)?)?))
}

define_comparison!(gt, |o| o == Ordering::Greater);
define_comparison!(lt, |o| o == Ordering::Less);
define_comparison!(ge, |o| o != Ordering::Less);
define_comparison!(le, |o| o != Ordering::Greater);

// `=` is structural equality, not restricted to numbers
fn num_eq(args: Vec<Value>) -> FunctionResult<Value> {
    let (lhs, rhs) = binary(&args)?;
    Ok(Value::Bool(lhs.is_equal(rhs)))
}

fn abs(args: Vec<Value>) -> FunctionResult<Value> {
    Ok(Value::Number(number(unary(&args)?)?.abs()?))
}

fn max(args: Vec<Value>) -> FunctionResult<Value> {
    extremum("max", args, Ordering::Greater)
}

fn min(args: Vec<Value>) -> FunctionResult<Value> {
    extremum("min", args, Ordering::Less)
}

// Either over the arguments, or over the elements of a single list argument.
// The first of several equal candidates wins.
fn extremum(name: &str, args: Vec<Value>, wanted: Ordering) -> FunctionResult<Value> {
    let mut best: Option<Number> = None;

    for candidate in candidates(args) {
        let candidate = number(&candidate)?;
        best = match best {
            Some(current) if candidate.numeric_cmp(&current) != Some(wanted) => Some(current),
            _ => Some(candidate),
        };
    }

    best.map(Value::Number)
        .ok_or_else(|| error::argument_error(format!("{}() arg is an empty sequence", name)))
}

fn candidates(args: Vec<Value>) -> Vec<Value> {
    if args.len() == 1 {
        if let Value::List(elts) = &args[0] {
            return elts.iter().cloned().collect();
        }
    }
    args
}

// Without a digit count the result is an integer, with one it keeps the
// representation of the argument. Ties round to even.
fn round(args: Vec<Value>) -> FunctionResult<Value> {
    let (x, digits) = unary_or_binary(&args)?;
    let x = number(x)?;

    let rounded = match (x, digits) {
        (Number::Fixnum(_), None) => x,
        (Number::Flonum(f), None) => Number::from_integral(round_half_even(f))?,
        (Number::Fixnum(n), Some(digits)) => {
            let digits = integer(digits)?;
            if digits >= 0 {
                x
            } else {
                let factor = 10f64.powi(clamp_exponent(-digits));
                Number::from_integral(round_half_even(n as f64 / factor) * factor)?
            }
        }
        (Number::Flonum(f), Some(digits)) => {
            let factor = 10f64.powi(clamp_exponent(integer(digits)?));
            Number::Flonum(round_half_even(f * factor) / factor)
        }
    };

    Ok(Value::Number(rounded))
}

fn clamp_exponent(e: i64) -> i32 {
    e.max(-308).min(308) as i32
}

fn round_half_even(f: f64) -> f64 {
    let rounded = f.round();
    if (f - f.trunc()).abs() == 0.5 {
        2.0 * (f / 2.0).round()
    } else {
        rounded
    }
}
