// Term representation
//
// This is what the reader produces and what the evaluator consumes.
// The representation is kept apart from runtime values, but every term can be
// turned into a value (see `Value::from(&Term)`), which is what quoting does.

#[cfg(test)]
pub mod arbitrary;

use crate::interpreter::value::number::Number;
use std::borrow::Borrow;

/// The suffix the tokenizer leaves on an operator token that is
/// directly followed by an opening parenthesis, e.g. `+(1,2)` yields `+%f`.
pub const CALL_MARKER: &str = "%f";

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Symbol(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Is this symbol in operator position of a call, i.e. does it carry the call marker?
    pub fn is_call_marked(&self) -> bool {
        self.0.ends_with(CALL_MARKER)
    }

    /// The name the operator is bound under, with the call marker removed.
    pub fn callee_name(&self) -> &str {
        self.0.strip_suffix(CALL_MARKER).unwrap_or(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(name)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_fmt(format_args!("sym#({})", self.as_str()))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Number(Number),
    Symbol(Symbol),
    Compound(Vec<Term>),
}

impl Term {
    pub fn number<I: Into<Number>>(num: I) -> Self {
        Term::Number(num.into())
    }

    pub fn symbol<S: Into<String>>(name: S) -> Self {
        Term::Symbol(Symbol::new(name))
    }

    pub fn compound<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        Term::Compound(elements.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn is_atom(&self) -> bool {
        !self.is_compound()
    }

    #[inline]
    pub fn is_compound(&self) -> bool {
        matches!(self, Term::Compound(_))
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Term::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Number> for Term {
    fn from(num: Number) -> Self {
        Term::Number(num)
    }
}

impl From<Symbol> for Term {
    fn from(sym: Symbol) -> Self {
        Term::Symbol(sym)
    }
}
