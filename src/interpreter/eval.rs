use super::environment::Environment;
use super::value::error::{self, RuntimeError};
use super::value::number::Number;
use super::value::Value;
use crate::stack::ensure_sufficient_stack;
use crate::term::{Symbol, Term};
use crate::DEFAULT_MAX_DEPTH;

pub type Result<T> = std::result::Result<T, RuntimeError>;

const QUOTE: &str = "quote";

/// The shapes of terms the evaluator distinguishes.
///
/// There is no form for conditionals, definitions or lambda expressions.
#[derive(Debug)]
enum Form<'t> {
    /// `op%f(args)`: the operator carries the call marker
    Application {
        operator: &'t Symbol,
        arguments: &'t [Term],
    },
    SymbolRef(&'t Symbol),
    Literal(&'t Number),
    /// the operands following `quote`
    Quote(&'t [Term]),
    ListFallback(&'t [Term]),
}

impl<'t> Form<'t> {
    fn classify(term: &'t Term) -> Form<'t> {
        match term {
            Term::Compound(elements) => match elements.split_first() {
                Some((Term::Symbol(operator), rest)) if operator.is_call_marked() => {
                    Form::Application {
                        operator,
                        arguments: call_arguments(rest),
                    }
                }
                Some((Term::Symbol(head), rest)) if head.as_str() == QUOTE => Form::Quote(rest),
                _ => Form::ListFallback(elements),
            },
            Term::Symbol(sym) => Form::SymbolRef(sym),
            Term::Number(num) => Form::Literal(num),
        }
    }
}

// `op(a, b)` reads as [op, (a, b)]: the arguments are the elements of the
// compound after the operator. Anything else passes the remaining elements.
fn call_arguments(rest: &[Term]) -> &[Term] {
    match rest {
        [Term::Compound(arguments), ..] => arguments,
        _ => rest,
    }
}

/// Evaluates terms, keeping track of the recursion depth.
#[derive(Debug)]
pub struct Evaluator {
    max_depth: usize,
    depth: usize,
}

impl Evaluator {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn evaluate(&mut self, term: &Term, env: &Environment) -> Result<Value> {
        self.descend(|this| this.dispatch(term, env))
    }

    /// Evaluate argument terms from left to right.
    ///
    /// A marked operator followed by a compound is applied to that compound's
    /// elements, consuming both. A marked operator with no compound after it
    /// is applied to no arguments.
    pub fn resolve_args(&mut self, terms: &[Term], env: &Environment) -> Result<Vec<Value>> {
        log::trace!("resolving arguments: {:?}", terms);
        let mut args = Vec::with_capacity(terms.len());
        let mut remaining = terms;

        while let Some((term, rest)) = remaining.split_first() {
            remaining = rest;

            let value = match term {
                Term::Symbol(operator) if operator.is_call_marked() => match rest.split_first() {
                    Some((Term::Compound(arguments), after)) => {
                        remaining = after;
                        self.descend(|this| this.apply(operator, arguments, env))?
                    }
                    _ => self.descend(|this| this.apply(operator, &[], env))?,
                },
                _ => self.evaluate(term, env)?,
            };

            args.push(value);
        }

        Ok(args)
    }

    fn descend<F>(&mut self, f: F) -> Result<Value>
    where
        F: FnOnce(&mut Self) -> Result<Value>,
    {
        if self.depth >= self.max_depth {
            return Err(error::recursion_limit(self.max_depth));
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, term: &Term, env: &Environment) -> Result<Value> {
        let form = Form::classify(term);
        log::trace!("evaluating {:?}", form);

        match form {
            Form::Application {
                operator,
                arguments,
            } => self.apply(operator, arguments, env),
            Form::SymbolRef(sym) => env
                .get(sym.as_str())
                .ok_or_else(|| error::undefined_variable(sym.clone())),
            Form::Literal(num) => Ok(Value::Number(*num)),
            Form::Quote(operands) => quote(operands),
            Form::ListFallback(elements) => match elements.first() {
                Some(first) => self.evaluate(first, env),
                None => Ok(Value::nil()),
            },
        }
    }

    fn apply(&mut self, operator: &Symbol, arguments: &[Term], env: &Environment) -> Result<Value> {
        let name = operator.callee_name();
        let procedure = match env.get(name) {
            Some(Value::Procedure(procedure)) => procedure,
            Some(other) => return Err(error::non_callable(other)),
            None => return Err(error::undefined_variable(Symbol::from(name))),
        };

        if !procedure.is_primitive() {
            log::debug!("`{}` is a special form, its arguments are evaluated anyway", name);
        }

        let args = self.resolve_args(arguments, env)?;
        log::trace!("applying `{}` to {:?}", name, args);
        procedure.call(self, args)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(DEFAULT_MAX_DEPTH)
    }
}

// A compound with a single atom is unwrapped to that atom. Every other payload,
// including a single nested compound, is returned as it is.
fn quote(operands: &[Term]) -> Result<Value> {
    let payload = match operands {
        [payload] => payload,
        _ => return Err(RuntimeError::MalformedQuote(operands.len())),
    };

    match payload {
        Term::Compound(elements) => match elements.as_slice() {
            [single] if single.is_atom() => Ok(Value::from(single)),
            _ => Ok(Value::from(payload)),
        },
        _ => Ok(Value::from(payload)),
    }
}

/// Evaluate `term` in `env` with a fresh evaluator.
pub fn evaluate(term: &Term, env: &Environment) -> Result<Value> {
    Evaluator::default().evaluate(term, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::builtins;
    use crate::interpreter::value::procedure::primitive::Primitive;
    use crate::interpreter::value::procedure::{Arity, Procedure};
    use crate::reader;

    fn global() -> Environment {
        builtins::standard_environment()
    }

    fn read(source: &str) -> Term {
        reader::read(&mut reader::tokenize(source)).unwrap()
    }

    fn quoted(payload: Term) -> Term {
        Term::compound(vec![Term::symbol("quote"), payload])
    }

    #[test]
    fn test_eval_literal() {
        let env = global();
        let term = Term::number(42);

        assert_eq!(evaluate(&term, &env), Ok(Value::from(42)));
        assert_eq!(evaluate(&term, &env), Ok(Value::from(42)));
        assert_eq!(evaluate(&Term::number(2.5), &env), Ok(Value::from(2.5)));
    }

    #[test]
    fn test_eval_symbol() {
        let env = Environment::empty();
        env.define(Symbol::from("x"), Value::from(5));

        assert_eq!(evaluate(&Term::symbol("x"), &env), Ok(Value::from(5)));
        assert_eq!(
            evaluate(&Term::symbol("y"), &env),
            Err(RuntimeError::UndefinedVariable(Symbol::from("y")))
        );
    }

    #[test]
    fn test_eval_application() {
        let env = global();
        let direct = Term::compound(vec![Term::symbol("+%f"), Term::number(2), Term::number(3)]);
        let call = Term::compound(vec![
            Term::symbol("+%f"),
            Term::compound(vec![Term::number(2), Term::number(3)]),
        ]);

        assert_eq!(evaluate(&direct, &env), Ok(Value::from(5)));
        assert_eq!(evaluate(&call, &env), Ok(Value::from(5)));
    }

    #[test]
    fn test_eval_nested_application() {
        let env = global();

        assert_eq!(evaluate(&read("(+(1, *(2, 3)))"), &env), Ok(Value::from(7)));
        assert_eq!(
            evaluate(&read("(list(1, -(5, 2), 3))"), &env),
            Ok(Value::list(vec![Value::from(1), Value::from(3), Value::from(3)]))
        );
    }

    #[test]
    fn test_eval_application_without_arguments() {
        let env = global();

        assert_eq!(evaluate(&read("(list%f)"), &env), Ok(Value::nil()));
        // a marked operator in argument position with no compound after it
        assert_eq!(
            evaluate(&Term::compound(vec![Term::symbol("list%f"), Term::symbol("list%f")]), &env),
            Ok(Value::list(vec![Value::nil()]))
        );
    }

    #[test]
    fn test_eval_application_errors() {
        let env = global();
        env.define(Symbol::from("five"), Value::from(5));

        assert_eq!(
            evaluate(&read("(nope(1))"), &env),
            Err(RuntimeError::UndefinedVariable(Symbol::from("nope")))
        );
        assert_eq!(
            evaluate(&read("(five(1))"), &env),
            Err(RuntimeError::NoncallableError(Value::from(5)))
        );
    }

    #[test]
    fn test_unmarked_operator_is_not_applied() {
        let env = global();

        // without the marker the compound falls back to evaluating its head
        match evaluate(&read("(+, 1, 2)"), &env) {
            Ok(Value::Procedure(p)) => assert_eq!(p.name(), Some(String::from("+"))),
            other => panic!("expected the + procedure, got {:?}", other),
        }
    }

    #[test]
    fn test_marked_symbol_alone_is_looked_up_verbatim() {
        let env = global();

        assert_eq!(
            evaluate(&Term::symbol("+%f"), &env),
            Err(RuntimeError::UndefinedVariable(Symbol::from("+%f")))
        );
    }

    #[test]
    fn test_special_form_receives_evaluated_arguments() {
        let env = global();
        let second = Primitive::special_form(
            "second",
            |_, args: Vec<Value>| Ok(args[1].clone()),
            Arity::Exactly(2),
        );
        assert!(!second.is_primitive());
        env.define(Symbol::from("second"), Value::Procedure(Procedure::primitive(second)));

        assert_eq!(evaluate(&read("(second(1, +(1, 2)))"), &env), Ok(Value::from(3)));
    }

    #[test]
    fn test_eval_list_fallback() {
        let env = global();

        assert_eq!(evaluate(&read("(1, x, y)"), &env), Ok(Value::from(1)));
        assert_eq!(evaluate(&read("((2, 3), 4)"), &env), Ok(Value::from(2)));
        assert_eq!(evaluate(&read("()"), &env), Ok(Value::nil()));
    }

    #[test]
    fn test_eval_quote() {
        let env = Environment::empty();

        assert_eq!(evaluate(&quoted(Term::symbol("x")), &env), Ok(Value::symbol("x")));
        assert_eq!(evaluate(&quoted(Term::number(1)), &env), Ok(Value::from(1)));
        assert_eq!(
            evaluate(&quoted(read("(x)")), &env),
            Ok(Value::symbol("x"))
        );
        assert_eq!(
            evaluate(&quoted(read("(x, y)")), &env),
            Ok(Value::list(vec![Value::symbol("x"), Value::symbol("y")]))
        );
        assert_eq!(
            evaluate(&quoted(read("((x))")), &env),
            Ok(Value::list(vec![Value::list(vec![Value::symbol("x")])]))
        );
        assert_eq!(evaluate(&quoted(read("()")), &env), Ok(Value::nil()));
    }

    #[test]
    fn test_eval_malformed_quote() {
        let env = Environment::empty();

        assert_eq!(
            evaluate(&Term::compound(vec![Term::symbol("quote")]), &env),
            Err(RuntimeError::MalformedQuote(0))
        );
        assert_eq!(
            evaluate(&read("(quote, a, b)"), &env),
            Err(RuntimeError::MalformedQuote(2))
        );
    }

    #[quickcheck]
    fn test_quote_unwraps_single_atoms_only(payload: Term) -> bool {
        let env = Environment::empty();
        let expected = match &payload {
            Term::Compound(elements) if elements.len() == 1 && elements[0].is_atom() => {
                Value::from(&elements[0])
            }
            _ => Value::from(&payload),
        };

        evaluate(&quoted(payload), &env) == Ok(expected)
    }

    #[test]
    fn test_recursion_limit() {
        let env = global();
        let mut evaluator = Evaluator::new(4);
        let shallow = read("(+(1, 2))");
        let deep = read("(+(1, +(1, +(1, +(1, 2)))))");

        assert_eq!(evaluator.evaluate(&shallow, &env), Ok(Value::from(3)));
        assert_eq!(evaluator.depth(), 0);
        assert_eq!(
            evaluator.evaluate(&deep, &env),
            Err(RuntimeError::RecursionLimit(4))
        );
        assert_eq!(evaluator.depth(), 0);
    }

    #[test]
    fn test_evaluation_leaves_environment_untouched() {
        let env = global();
        let before = env.binding_names();

        evaluate(&read("(+(1, 2))"), &env).unwrap();
        evaluate(&Term::number(1), &env).unwrap();

        assert_eq!(env.binding_names(), before);
    }
}
