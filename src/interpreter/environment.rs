use super::value::Value;
use crate::term::Symbol;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

type Bindings = FxHashMap<Symbol, Value>;

/// A chain of scopes.
///
/// Each scope points to its parent, the outermost scope is the global one.
/// Cloning an environment is cheap and shares the scopes, which is how
/// closures capture the environment they were created in.
/// Scopes only ever grow; bindings are never removed.
#[derive(Clone)]
pub struct Environment {
    scope: Rc<Scope>,
}

struct Scope {
    bindings: RefCell<Bindings>,
    parent: Option<Environment>,
}

impl Environment {
    pub fn empty() -> Self {
        Environment {
            scope: Rc::new(Scope {
                bindings: RefCell::new(Bindings::default()),
                parent: None,
            }),
        }
    }

    /// Create a child scope holding `bindings`, with this environment as its parent.
    pub fn extend<I>(&self, bindings: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, Value)>,
    {
        Environment {
            scope: Rc::new(Scope {
                bindings: RefCell::new(bindings.into_iter().collect()),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Bind `sym` in the innermost scope.
    pub fn define(&self, sym: Symbol, val: Value) -> &Self {
        self.scope.bindings.borrow_mut().insert(sym, val);
        self
    }

    /// Look `name` up, walking from the innermost to the outermost scope.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = Some(self);

        while let Some(env) = current {
            if let Some(value) = env.scope.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            current = env.scope.parent.as_ref();
        }
        None
    }

    pub fn parent(&self) -> Option<&Environment> {
        self.scope.parent.as_ref()
    }

    pub fn is_global(&self) -> bool {
        self.scope.parent.is_none()
    }

    /// All names visible from this scope, sorted.
    pub fn binding_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut current = Some(self);

        while let Some(env) = current {
            names.extend(env.scope.bindings.borrow().keys().map(|k| String::from(k.as_str())));
            current = env.scope.parent.as_ref();
        }

        names.sort();
        names.dedup();
        names
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }

        f.debug_struct("Environment")
            .field("bindings", &self.scope.bindings.borrow().len())
            .field("depth", &depth)
            .finish()
    }
}
