use super::arguments::*;
use crate::interpreter::environment::Environment;
use crate::interpreter::value::equality::Equality;
use crate::interpreter::value::procedure::{Arity, FunctionResult};
use crate::interpreter::value::Value;

macro_rules! define_predicate {
    ($name:ident, $pattern:pat) => {
        fn $name(args: Vec<Value>) -> FunctionResult<Value> {
            Ok(Value::Bool(matches!(unary(&args)?, $pattern)))
        }
    };
}

pub fn register(env: &Environment) {
    register_core!(env, "eq?", eq, Arity::Exactly(2));
    register_core!(env, "equal?", equal, Arity::Exactly(2));
    register_core!(env, "list?", list_p, Arity::Exactly(1));
    register_core!(env, "null?", null_p, Arity::Exactly(1));
    register_core!(env, "number?", number_p, Arity::Exactly(1));
    register_core!(env, "procedure?", procedure_p, Arity::Exactly(1));
    register_core!(env, "symbol?", symbol_p, Arity::Exactly(1));
    register_core!(env, "not", not, Arity::Exactly(1));
}

pub fn eq(args: Vec<Value>) -> FunctionResult<Value> {
    let (lhs, rhs) = binary(&args)?;
    Ok(Value::Bool(lhs.is_eq(rhs)))
}

pub fn equal(args: Vec<Value>) -> FunctionResult<Value> {
    let (lhs, rhs) = binary(&args)?;
    Ok(Value::Bool(lhs.is_equal(rhs)))
}

define_predicate!(list_p, Value::List(_));
define_predicate!(number_p, Value::Number(_));
define_predicate!(procedure_p, Value::Procedure(_));
define_predicate!(symbol_p, Value::Symbol(_));

pub fn null_p(args: Vec<Value>) -> FunctionResult<Value> {
    Ok(Value::Bool(unary(&args)?.is_null()))
}

pub fn not(args: Vec<Value>) -> FunctionResult<Value> {
    Ok(Value::Bool(!unary(&args)?.is_truthy()))
}
