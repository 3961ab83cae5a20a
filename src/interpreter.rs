pub mod builtins;
pub mod environment;
pub mod eval;
pub mod printer;
pub mod settings;
pub mod value;

use crate::reader::{self, Reader};
use crate::term::Term;
use crate::DEFAULT_MAX_DEPTH;
use environment::Environment;
use eval::Evaluator;
use printer::Writer;
pub use settings::{Setting, Settings};
use thiserror::Error;
use value::error::RuntimeError;
use value::Value;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    ReadError(#[from] reader::Error),
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reads and evaluates lines against one global environment.
///
/// Each interpreter owns its environment, so two interpreters never see
/// each other's bindings.
pub struct Interpreter {
    pub settings: Settings,
    global: Environment,
    reader: Reader,
    writer: Writer,
    max_depth: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self::with_environment(builtins::standard_environment(), max_depth)
    }

    pub fn with_environment(global: Environment, max_depth: usize) -> Self {
        Self {
            settings: Settings::default(),
            global,
            reader: Reader::with_max_depth(max_depth),
            writer: Writer::new(),
            max_depth,
        }
    }

    /// Parse one line and evaluate the result in the global environment.
    pub fn run_string(&mut self, input: &str) -> Result<Value> {
        let term = self.reader.parse(input)?;

        if self.settings.is_enabled(&Setting::Debug) {
            println!("tokens: {:?}", reader::tokenize(input));
            println!("term:   {}", self.writer.write_toplevel(&term));
        }

        self.evaluate(&term)
    }

    pub fn evaluate(&self, term: &Term) -> Result<Value> {
        let mut evaluator = Evaluator::new(self.max_depth);
        Ok(evaluator.evaluate(term, &self.global)?)
    }

    pub fn global(&self) -> &Environment {
        &self.global
    }

    pub fn binding_names(&self) -> Vec<String> {
        self.global.binding_names()
    }

    pub fn reader(&self) -> &Reader {
        &self.reader
    }

    pub fn write(&self, v: &Value) -> String {
        self.writer.write(v)
    }

    pub fn write_toplevel(&self, term: &Term) -> String {
        self.writer.write_toplevel(term)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
