use super::Term;
use crate::interpreter::value::number::Number;
use quickcheck::{Arbitrary, Gen};

// Names that survive a write/read cycle unchanged: no separators, no parentheses,
// nothing that coerces to a number.
const SYMBOL_NAMES: &[&str] = &[
    "a", "foo", "x1", "+", "-", "*", "list?", "null?", "quote", "eq?", "foo-bar", "<=",
];

const MAX_NESTING: usize = 3;

impl Arbitrary for Term {
    fn arbitrary(gen: &mut Gen) -> Self {
        arbitrary_term(gen, MAX_NESTING)
    }
}

fn arbitrary_term(gen: &mut Gen, depth: usize) -> Term {
    match gen.choose(&[1, 2, 3, 4]) {
        Some(1) => Term::Number(Number::Fixnum(i64::arbitrary(gen))),
        // quarters are exactly representable, so they print and re-read without loss
        Some(2) => Term::Number(Number::Flonum(f64::from(i32::arbitrary(gen)) / 4.0)),
        Some(4) if depth > 0 => {
            let len = usize::arbitrary(gen) % 4;
            Term::Compound((0..len).map(|_| arbitrary_term(gen, depth - 1)).collect())
        }
        _ => match gen.choose(SYMBOL_NAMES) {
            Some(name) => Term::symbol(*name),
            None => Term::symbol("a"),
        },
    }
}
