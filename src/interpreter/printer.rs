use super::value::closure::Closure;
use super::value::number::Number;
use super::value::procedure::primitive::Primitive;
use super::value::procedure::{Arity, HasArity, Procedure};
use super::value::Value;
use crate::term::Term;

/// The writer creates the external representation of values and terms.
///
/// Lists and compounds print in call notation without an operator, i.e.
/// `(1, 2, (a, b))`, which the reader turns back into the same term.
#[derive(Debug, Clone, Default)]
pub struct Writer;

impl Writer {
    pub fn new() -> Self {
        Writer
    }

    pub fn write(&self, v: &Value) -> String {
        match v {
            Value::Bool(true) => String::from("True"),
            Value::Bool(false) => String::from("False"),
            Value::Number(num) => self.write_number(num),
            Value::Symbol(sym) => sym.to_string(),
            Value::List(elts) => self.write_sequence(elts.iter().map(|e| self.write(e))),
            Value::Procedure(proc) => self.write_procedure(proc),
        }
    }

    pub fn write_term(&self, term: &Term) -> String {
        match term {
            Term::Number(num) => self.write_number(num),
            Term::Symbol(sym) => sym.to_string(),
            Term::Compound(elements) => {
                self.write_sequence(elements.iter().map(|e| self.write_term(e)))
            }
        }
    }

    /// Render the result of `reader::parse` the way it was typed: the head
    /// token followed by the term read from the rest of the line.
    pub fn write_toplevel(&self, term: &Term) -> String {
        match term {
            Term::Compound(elements) => match elements.as_slice() {
                [head, rest] => format!("{} {}", self.write_term(head), self.write_term(rest)),
                _ => self.write_term(term),
            },
            _ => self.write_term(term),
        }
    }

    fn write_sequence<I: Iterator<Item = String>>(&self, body: I) -> String {
        format!("({})", body.collect::<Vec<_>>().join(", "))
    }

    fn write_number(&self, num: &Number) -> String {
        format!("{}", num)
    }

    fn write_procedure(&self, proc: &Procedure) -> String {
        match proc {
            Procedure::Primitive(proc) => self.write_primitive(proc),
            Procedure::Closure(closure) => self.write_closure(closure),
        }
    }

    fn write_primitive(&self, proc: &Primitive) -> String {
        let formals = self.write_formals(&proc.arity());

        if formals.is_empty() {
            format!("#<procedure ({})>", proc.name)
        } else {
            format!("#<procedure ({} {})>", proc.name, formals)
        }
    }

    fn write_closure(&self, closure: &Closure) -> String {
        let params: Vec<String> = closure.parameters.iter().map(|p| p.to_string()).collect();
        format!("#<closure ({})>", params.join(", "))
    }

    fn write_formals(&self, arity: &Arity) -> String {
        let fixed = |count: usize| (0..count).map(|i| format!("x{}", i)).collect::<Vec<_>>();

        match arity {
            Arity::Exactly(count) => fixed(*count).join(" "),
            Arity::AtLeast(count) => {
                let mut formals = fixed(*count);
                formals.push(String::from(". rest"));
                formals.join(" ")
            }
            Arity::Between(min, max) => {
                let mut formals = fixed(*min);
                formals.extend((*min..*max).map(|i| format!("[x{}]", i)));
                formals.join(" ")
            }
            Arity::Many => String::from(". args"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::builtins::standard_environment;
    use crate::interpreter::environment::Environment;
    use crate::reader;
    use crate::term::Symbol;

    fn write_binding(name: &str) -> String {
        let env = standard_environment();
        match env.get(name) {
            Some(v) => Writer::new().write(&v),
            None => panic!("{} is unbound", name),
        }
    }

    #[test]
    fn test_write_atoms() {
        let writer = Writer::new();

        assert_eq!(writer.write(&Value::from(42)), "42");
        assert_eq!(writer.write(&Value::from(-3)), "-3");
        assert_eq!(writer.write(&Value::from(2.0)), "2.0");
        assert_eq!(writer.write(&Value::from(3.5)), "3.5");
        assert_eq!(writer.write(&Value::from(f64::INFINITY)), "inf");
        assert_eq!(writer.write(&Value::symbol("foo")), "foo");
        assert_eq!(writer.write(&Value::from(true)), "True");
        assert_eq!(writer.write(&Value::from(false)), "False");
    }

    #[test]
    fn test_write_list() {
        let writer = Writer::new();
        let ls = Value::list(vec![
            Value::from(1),
            Value::list(vec![Value::symbol("a"), Value::symbol("b")]),
            Value::nil(),
        ]);

        assert_eq!(writer.write(&ls), "(1, (a, b), ())");
    }

    #[test]
    fn test_write_procedure() {
        assert_eq!(write_binding("+"), "#<procedure (+ x0 x1)>");
        assert_eq!(write_binding("list"), "#<procedure (list . args)>");
        assert_eq!(write_binding("begin"), "#<procedure (begin x0 . rest)>");
        assert_eq!(write_binding("log"), "#<procedure (log x0 [x1])>");

        let closure = Closure::new(
            vec![Symbol::from("x"), Symbol::from("y")],
            Term::symbol("x"),
            Environment::empty(),
        );
        assert_eq!(
            Writer::new().write(&Value::Procedure(Procedure::closure(closure))),
            "#<closure (x, y)>"
        );
    }

    #[test]
    fn test_write_toplevel() {
        let writer = Writer::new();

        let term = reader::parse("print(1,2)").unwrap();
        assert_eq!(writer.write_toplevel(&term), "print%f (1, 2)");

        let term = reader::parse("quote,x").unwrap();
        assert_eq!(writer.write_toplevel(&term), "quote x");

        assert_eq!(writer.write_toplevel(&Term::number(1)), "1");
    }

    #[test]
    fn test_parse_is_not_the_inverse_of_write() {
        // the head of a parsed line is never coerced
        let term = reader::parse("1,2").unwrap();

        assert_eq!(
            term,
            Term::compound(vec![Term::symbol("1"), Term::number(2)])
        );
    }

    #[quickcheck]
    fn test_read_is_write_inverse(term: Term) -> bool {
        let external = Writer::new().write_term(&term);
        reader::read(&mut reader::tokenize(&external)) == Ok(term)
    }
}
