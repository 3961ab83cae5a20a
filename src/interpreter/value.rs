pub mod closure;
pub mod equality;
pub mod error;
pub mod number;
pub mod procedure;

use crate::term::{Symbol, Term};
use equality::Equality;
use number::Number;
use procedure::Procedure;

pub type List = im_rc::Vector<Value>;

// Runtime values
// Every expression eventually evaluates to a value of this kind
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Number(Number),
    Symbol(Symbol),
    List(List),
    Procedure(Procedure),
}

impl Value {
    pub fn nil() -> Value {
        Value::List(List::new())
    }

    pub fn symbol<S: Into<String>>(name: S) -> Value {
        Value::Symbol(Symbol::new(name))
    }

    pub fn list<I: IntoIterator<Item = Value>>(elements: I) -> Value {
        Value::List(elements.into_iter().collect())
    }

    pub fn is_null(&self) -> bool {
        match self {
            Value::List(elts) => elts.is_empty(),
            _ => false,
        }
    }

    /// `False`, zero and the empty list are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => !n.is_zero(),
            Value::List(elts) => !elts.is_empty(),
            _ => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, rhs: &Value) -> bool {
        match (self, rhs) {
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::Symbol(l), Value::Symbol(r)) => l == r,
            (Value::List(l), Value::List(r)) => l == r,
            (Value::Procedure(l), Value::Procedure(r)) => l == r,
            _ => false,
        }
    }
}

impl Equality<Value> for Value {
    fn is_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l.numeric_eq(r),
            (Value::Symbol(l), Value::Symbol(r)) => l == r,
            (Value::List(l), Value::List(r)) => (l.is_empty() && r.is_empty()) || l.ptr_eq(r),
            (Value::Procedure(l), Value::Procedure(r)) => l.is_eq(r),
            _ => false,
        }
    }

    fn is_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(l), Value::Number(r)) => l.numeric_eq(r),
            (Value::List(l), Value::List(r)) => {
                l.len() == r.len() && l.iter().zip(r.iter()).all(|(a, b)| a.is_equal(b))
            }
            (Value::Procedure(l), Value::Procedure(r)) => l.is_equal(r),
            _ => self.is_eq(other),
        }
    }
}

impl From<&Term> for Value {
    fn from(term: &Term) -> Self {
        match term {
            Term::Number(n) => Value::Number(*n),
            Term::Symbol(s) => Value::Symbol(s.clone()),
            Term::Compound(elements) => elements.iter().map(Value::from).collect(),
        }
    }
}

impl std::iter::FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n.into())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Procedure> for Value {
    fn from(p: Procedure) -> Self {
        Value::Procedure(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_term() {
        let term = Term::compound(vec![
            Term::symbol("a"),
            Term::compound(vec![Term::number(1), Term::number(2.5)]),
        ]);

        assert_eq!(
            Value::from(&term),
            Value::list(vec![
                Value::symbol("a"),
                Value::list(vec![Value::from(1), Value::from(2.5)]),
            ])
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(!Value::nil().is_truthy());
        assert!(Value::from(1).is_truthy());
        assert!(Value::symbol("x").is_truthy());
        assert!(Value::list(vec![Value::nil()]).is_truthy());
    }

    #[test]
    fn test_eq_is_identity_for_lists() {
        let ls = Value::list(vec![Value::from(1)]);
        let other = Value::list(vec![Value::from(1)]);

        assert!(ls.is_eq(&ls));
        assert!(!ls.is_eq(&other));
        assert!(ls.is_equal(&other));
        assert!(Value::nil().is_eq(&Value::nil()));
    }

    #[test]
    fn test_equal_compares_numbers_numerically() {
        assert!(Value::from(1).is_equal(&Value::from(1.0)));
        assert_ne!(Value::from(1), Value::from(1.0));
        assert!(!Value::symbol("a").is_equal(&Value::from(1)));
    }
}
