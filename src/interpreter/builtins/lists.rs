use super::arguments::*;
use crate::interpreter::environment::Environment;
use crate::interpreter::eval::Evaluator;
use crate::interpreter::value::error;
use crate::interpreter::value::procedure::{Arity, FunctionResult};
use crate::interpreter::value::{List, Value};

pub fn register(env: &Environment) {
    register_core!(env, "list", list_new, Arity::Many);
    register_core!(env, "cons", cons, Arity::Exactly(2));
    register_core!(env, "first", first, Arity::Exactly(1));
    register_core!(env, "rest", rest, Arity::Exactly(1));
    register_core!(env, "length", length, Arity::Exactly(1));
    register_core!(env, "append", append, Arity::Exactly(2));
    register_core!(env, "begin", begin, Arity::AtLeast(1));
    register_primitive!(env, "map", map, Arity::AtLeast(2));
    register_primitive!(env, "apply", apply, Arity::Exactly(2));
}

fn list_new(args: Vec<Value>) -> FunctionResult<Value> {
    Ok(Value::list(args))
}

fn cons(args: Vec<Value>) -> FunctionResult<Value> {
    let (head, tail) = binary(&args)?;
    let mut elts = list(tail)?.clone();
    elts.push_front(head.clone());
    Ok(Value::List(elts))
}

fn first(args: Vec<Value>) -> FunctionResult<Value> {
    list(unary(&args)?)?
        .front()
        .cloned()
        .ok_or_else(|| error::argument_error("first of an empty list"))
}

fn rest(args: Vec<Value>) -> FunctionResult<Value> {
    let elts = list(unary(&args)?)?;
    if elts.is_empty() {
        Ok(Value::nil())
    } else {
        Ok(Value::List(elts.skip(1)))
    }
}

fn length(args: Vec<Value>) -> FunctionResult<Value> {
    Ok(Value::from(list(unary(&args)?)?.len() as i64))
}

fn append(args: Vec<Value>) -> FunctionResult<Value> {
    let (lhs, rhs) = binary(&args)?;
    let mut elts = list(lhs)?.clone();
    elts.append(list(rhs)?.clone());
    Ok(Value::List(elts))
}

fn begin(args: Vec<Value>) -> FunctionResult<Value> {
    args.last()
        .cloned()
        .ok_or_else(|| error::arity_mismatch(Arity::AtLeast(1), 0))
}

// Apply the procedure to the elements of the lists in lockstep,
// stopping at the end of the shortest list.
fn map(evaluator: &mut Evaluator, args: Vec<Value>) -> FunctionResult<Value> {
    let (proc, lists) = match args.split_first() {
        Some((proc, lists)) if !lists.is_empty() => (procedure(proc)?, lists),
        _ => return Err(error::arity_mismatch(Arity::AtLeast(2), args.len())),
    };
    let lists = lists.iter().map(list).collect::<FunctionResult<Vec<&List>>>()?;
    let len = lists.iter().map(|elts| elts.len()).min().unwrap_or(0);

    let mut result = List::new();
    for i in 0..len {
        let call_args = lists.iter().map(|elts| elts[i].clone()).collect();
        result.push_back(proc.call(evaluator, call_args)?);
    }

    Ok(Value::List(result))
}

fn apply(evaluator: &mut Evaluator, args: Vec<Value>) -> FunctionResult<Value> {
    let (proc, arguments) = binary(&args)?;
    let arguments = list(arguments)?.iter().cloned().collect();
    procedure(proc)?.call(evaluator, arguments)
}
