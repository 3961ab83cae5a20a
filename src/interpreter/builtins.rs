// The global environment
//
// Everything bound here is a primitive procedure, except for the numeric
// constants. The evaluator only relies on names resolving to procedures;
// each primitive checks its own arguments.

macro_rules! register_core {
    ($env:expr, $name:literal, $func:expr, $arity:expr) => {
        register_primitive!($env, $name, move |_, args| $func(args), $arity)
    };
}

// for primitives that call back into the evaluator
macro_rules! register_primitive {
    ($env:expr, $name:literal, $func:expr, $arity:expr) => {
        $env.define(
            crate::term::Symbol::from($name),
            crate::interpreter::value::Value::Procedure(
                crate::interpreter::value::procedure::Procedure::primitive(
                    crate::interpreter::value::procedure::primitive::Primitive::new(
                        $name, $func, $arity,
                    ),
                ),
            ),
        )
    };
}

pub mod arguments;
pub mod lists;
pub mod math;
pub mod numbers;
pub mod predicates;

use super::environment::Environment;

/// Build a fresh global environment holding the constants and all primitives.
pub fn standard_environment() -> Environment {
    let env = Environment::empty();

    math::register(&env);
    numbers::register(&env);
    lists::register(&env);
    predicates::register(&env);

    log::debug!("standard environment holds {} bindings", env.binding_names().len());
    env
}
