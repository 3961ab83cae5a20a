use super::error;
use super::procedure::{Arity, FunctionResult};
use super::Value;
use crate::interpreter::environment::Environment;
use crate::interpreter::eval::Evaluator;
use crate::term::{Symbol, Term};

/// A user defined procedure.
///
/// The closure keeps the environment it was created in. Calling it binds the
/// parameters in a fresh scope on top of that environment, not on top of the
/// caller's, and evaluates the body there.
///
/// No form of the language creates closures yet; they can only be built
/// through this API and bound into an environment.
#[derive(Clone)]
pub struct Closure {
    pub parameters: Vec<Symbol>,
    pub body: Term,
    env: Environment,
}

impl Closure {
    pub fn new(parameters: Vec<Symbol>, body: Term, env: Environment) -> Self {
        Self {
            parameters,
            body,
            env,
        }
    }

    pub fn arity(&self) -> Arity {
        Arity::Exactly(self.parameters.len())
    }

    pub fn call(&self, evaluator: &mut Evaluator, arguments: Vec<Value>) -> FunctionResult<Value> {
        if arguments.len() != self.parameters.len() {
            return Err(error::arity_mismatch(self.arity(), arguments.len()));
        }

        let scope = self
            .env
            .extend(self.parameters.iter().cloned().zip(arguments.into_iter()));

        evaluator.evaluate(&self.body, &scope)
    }
}

// the captured environment may contain the closure itself
impl std::fmt::Debug for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closure")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish()
    }
}
