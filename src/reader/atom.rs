use crate::interpreter::value::number::Number;
use crate::term::Term;

/// Numbers become numbers; every other token is a symbol.
///
/// Integers are tried first, then floats. Integers that do not fit into
/// an `i64` are read as floats.
pub fn coerce(token: &str) -> Term {
    if let Ok(n) = token.parse::<i64>() {
        return Term::Number(Number::Fixnum(n));
    }

    if let Ok(n) = token.parse::<f64>() {
        return Term::Number(Number::Flonum(n));
    }

    Term::symbol(token)
}
