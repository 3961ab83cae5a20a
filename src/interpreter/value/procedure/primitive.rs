use super::{Arity, FunctionResult, HasArity};
use crate::interpreter::eval::Evaluator;
use crate::interpreter::value::Value;

pub type PrimitiveImpl = dyn Fn(&mut Evaluator, Vec<Value>) -> FunctionResult<Value>;

/// A built-in procedure.
///
/// The arity is descriptive only; each implementation validates its own
/// arguments. The `primitive` flag separates procedures that take evaluated
/// arguments from special forms. There is no special form in the language,
/// so the evaluator still evaluates the arguments of a non-primitive.
pub struct Primitive {
    pub name: String,
    pub arity: Arity,
    primitive: bool,
    proc: Box<PrimitiveImpl>,
}

impl Primitive {
    pub fn new<S, I>(name: S, op: I, arity: Arity) -> Self
    where
        S: Into<String>,
        I: 'static + Fn(&mut Evaluator, Vec<Value>) -> FunctionResult<Value>,
    {
        Self {
            name: name.into(),
            arity,
            primitive: true,
            proc: Box::new(op),
        }
    }

    pub fn special_form<S, I>(name: S, op: I, arity: Arity) -> Self
    where
        S: Into<String>,
        I: 'static + Fn(&mut Evaluator, Vec<Value>) -> FunctionResult<Value>,
    {
        Self {
            primitive: false,
            ..Self::new(name, op, arity)
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive
    }

    pub fn call(&self, evaluator: &mut Evaluator, arguments: Vec<Value>) -> FunctionResult<Value> {
        (self.proc)(evaluator, arguments)
    }
}

impl HasArity for Primitive {
    fn arity(&self) -> Arity {
        self.arity.clone()
    }
}

impl std::fmt::Debug for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("Primitive({})", self.name))
    }
}
