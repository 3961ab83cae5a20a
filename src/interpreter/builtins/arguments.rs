use crate::interpreter::printer::Writer;
use crate::interpreter::value::error;
use crate::interpreter::value::number::Number;
use crate::interpreter::value::procedure::{Arity, FunctionResult, Procedure};
use crate::interpreter::value::{List, Value};

// Helpers

pub fn binary(args: &[Value]) -> FunctionResult<(&Value, &Value)> {
    match args {
        [first, second] => Ok((first, second)),
        _ => Err(error::arity_mismatch(Arity::Exactly(2), args.len())),
    }
}

pub fn unary(args: &[Value]) -> FunctionResult<&Value> {
    match args {
        [first] => Ok(first),
        _ => Err(error::arity_mismatch(Arity::Exactly(1), args.len())),
    }
}

pub fn unary_or_binary(args: &[Value]) -> FunctionResult<(&Value, Option<&Value>)> {
    match args {
        [first] => Ok((first, None)),
        [first, second] => Ok((first, Some(second))),
        _ => Err(error::arity_mismatch(Arity::Between(1, 2), args.len())),
    }
}

pub fn number(v: &Value) -> FunctionResult<Number> {
    match v {
        Value::Number(n) => Ok(*n),
        v => Err(error::argument_error(format!("`{}` is not a number", describe(v)))),
    }
}

pub fn integer(v: &Value) -> FunctionResult<i64> {
    match v {
        Value::Number(Number::Fixnum(n)) => Ok(*n),
        v => Err(error::argument_error(format!("`{}` is not an integer", describe(v)))),
    }
}

pub fn list(v: &Value) -> FunctionResult<&List> {
    match v {
        Value::List(elts) => Ok(elts),
        v => Err(error::argument_error(format!("`{}` is not a list", describe(v)))),
    }
}

pub fn procedure(v: &Value) -> FunctionResult<&Procedure> {
    match v {
        Value::Procedure(p) => Ok(p),
        v => Err(error::non_callable(v.clone())),
    }
}

fn describe(v: &Value) -> String {
    Writer::new().write(v)
}
