use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("SyntaxError: unexpected EOF while reading")]
    UnexpectedEof,
    #[error("SyntaxError: unexpected )")]
    UnexpectedCloseParen,
    #[error("SyntaxError: nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),
}
