// Reader
//
// Turns a line of text into a term: the tokenizer splits the text, the reader
// consumes the tokens from the front and builds the term recursively.

pub mod atom;
pub mod error;
pub mod tokenizer;

pub use error::Error;
pub use tokenizer::{tokenize, Token, Tokens};

use crate::stack::ensure_sufficient_stack;
use crate::term::{Symbol, Term};
use crate::DEFAULT_MAX_DEPTH;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct Reader {
    max_depth: usize,
}

impl Reader {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Reader { max_depth }
    }

    /// Read a top-level expression from `input`.
    ///
    /// The top level is not read like nested input. The first token is taken
    /// as it is (it's neither coerced nor checked for parentheses) and only the
    /// tokens after it are read as a single term. The result is the compound
    /// `[head, rest]`. Tokens following that term are ignored.
    pub fn parse(&self, input: &str) -> Result<Term> {
        let mut tokens = tokenize(input);
        let head = tokens.pop_front().ok_or(Error::UnexpectedEof)?;
        let rest = self.read(&mut tokens)?;

        if !tokens.is_empty() {
            log::warn!("ignoring {} trailing token(s): {:?}", tokens.len(), tokens);
        }

        let term = Term::Compound(vec![Term::Symbol(Symbol::from(head.into_string())), rest]);
        log::trace!("parsed: {:?}", term);
        Ok(term)
    }

    /// Read one term, consuming its tokens from the front of `tokens`.
    pub fn read(&self, tokens: &mut Tokens) -> Result<Term> {
        self.read_term(tokens, 0)
    }

    fn read_term(&self, tokens: &mut Tokens, depth: usize) -> Result<Term> {
        if depth > self.max_depth {
            return Err(Error::NestingTooDeep(self.max_depth));
        }

        let token = tokens.pop_front().ok_or(Error::UnexpectedEof)?;

        if token.is_open() {
            let mut elements = Vec::new();
            loop {
                match tokens.front() {
                    None => return Err(Error::UnexpectedEof),
                    Some(t) if t.is_close() => {
                        tokens.pop_front();
                        return Ok(Term::Compound(elements));
                    }
                    Some(_) => elements.push(ensure_sufficient_stack(|| {
                        self.read_term(tokens, depth + 1)
                    })?),
                }
            }
        } else if token.is_close() {
            Err(Error::UnexpectedCloseParen)
        } else {
            Ok(atom::coerce(token.as_str()))
        }
    }
}

impl Default for Reader {
    fn default() -> Self {
        Reader::new()
    }
}

/// Read a top-level expression with the default reader.
pub fn parse(input: &str) -> Result<Term> {
    Reader::new().parse(input)
}

/// Read one term from `tokens` with the default reader.
pub fn read(tokens: &mut Tokens) -> Result<Term> {
    Reader::new().read(tokens)
}
