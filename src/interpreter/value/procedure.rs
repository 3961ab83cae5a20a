pub mod primitive;

use super::closure::Closure;
use super::equality::Equality;
use super::error::RuntimeError;
use super::Value;
use crate::interpreter::eval::Evaluator;
use std::rc::Rc;

pub type FunctionResult<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
    Many,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
            Arity::Between(min, max) => count >= *min && count <= *max,
            Arity::Many => true,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Between(min, max) => write!(f, "{} to {}", min, max),
            Arity::Many => f.write_str("any number of"),
        }
    }
}

pub trait HasArity {
    fn arity(&self) -> Arity;
}

/// Anything that can be applied to a list of already evaluated arguments.
#[derive(Debug, Clone)]
pub enum Procedure {
    Primitive(Rc<primitive::Primitive>),
    Closure(Rc<Closure>),
}

impl Procedure {
    pub fn primitive(proc: primitive::Primitive) -> Self {
        Self::Primitive(Rc::new(proc))
    }

    pub fn closure(closure: Closure) -> Self {
        Self::Closure(Rc::new(closure))
    }

    pub fn name(&self) -> Option<String> {
        match self {
            Self::Primitive(proc) => Some(proc.name.clone()),
            Self::Closure(_) => None,
        }
    }

    /// Primitives always receive eagerly evaluated arguments. Closures do as well.
    pub fn is_primitive(&self) -> bool {
        match self {
            Self::Primitive(proc) => proc.is_primitive(),
            Self::Closure(_) => true,
        }
    }

    pub fn call(&self, evaluator: &mut Evaluator, arguments: Vec<Value>) -> FunctionResult<Value> {
        match self {
            Self::Primitive(proc) => proc.call(evaluator, arguments),
            Self::Closure(closure) => closure.call(evaluator, arguments),
        }
    }
}

impl Equality<Procedure> for Procedure {
    fn is_eq(&self, other: &Procedure) -> bool {
        match (self, other) {
            (Self::Primitive(lhs), Self::Primitive(rhs)) => Rc::ptr_eq(lhs, rhs),
            (Self::Closure(lhs), Self::Closure(rhs)) => Rc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }

    fn is_equal(&self, other: &Procedure) -> bool {
        self.is_eq(other)
    }
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Procedure) -> bool {
        self.is_eq(other)
    }
}

impl HasArity for Procedure {
    fn arity(&self) -> Arity {
        match self {
            Procedure::Primitive(proc) => proc.arity.clone(),
            Procedure::Closure(closure) => closure.arity(),
        }
    }
}
