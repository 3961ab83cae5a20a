use crate::term::CALL_MARKER;
use std::collections::VecDeque;

pub type Tokens = VecDeque<Token>;

/// A lexical fragment of the input.
///
/// Tokens are not classified while lexing. Whether a token opens or closes a
/// compound, or is an atom, is decided by the reader when it consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.0 == "("
    }

    #[inline]
    pub fn is_close(&self) -> bool {
        self.0 == ")"
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(s.to_string())
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Convert a line of text into tokens.
///
/// Whitespace is insignificant and removed first. Commas separate tokens,
/// parentheses become tokens of their own. Every `(` is preceded by the call
/// marker before splitting; a marker that ends up on its own is dropped, a
/// marker glued to the preceding operator (`+(` becomes `+%f`) stays.
pub fn tokenize(input: &str) -> Tokens {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    log::trace!("comma separated segments: {:?}", stripped.split(',').collect::<Vec<_>>());

    let tokens: Tokens = stripped
        .split(',')
        .flat_map(tokenize_segment)
        .filter(|token| token.as_str() != CALL_MARKER)
        .collect();

    log::trace!("token list: {:?}", tokens);
    tokens
}

fn tokenize_segment(segment: &str) -> Vec<Token> {
    segment
        .replace('(', &format!("{}(", CALL_MARKER))
        .replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(Token::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_strings(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(Token::into_string).collect()
    }

    #[test]
    fn test_tokenize_leading_paren() {
        assert_eq!(token_strings("(+,1,2)"), vec!["(", "+", "1", "2", ")"]);
    }

    #[test]
    fn test_tokenize_drops_whitespace() {
        assert_eq!(token_strings(" ( +, 1 ,\t2 ) "), vec!["(", "+", "1", "2", ")"]);
        assert_eq!(token_strings("foo bar"), vec!["foobar"]);
    }

    #[test]
    fn test_tokenize_keeps_marker_on_operator() {
        assert_eq!(token_strings("+(1,2)"), vec!["+%f", "(", "1", "2", ")"]);
        assert_eq!(
            token_strings("+(1, *(2, 3))"),
            vec!["+%f", "(", "1", "*%f", "(", "2", "3", ")", ")"]
        );
    }

    #[test]
    fn test_tokenize_nested_leading_parens() {
        assert_eq!(
            token_strings("((a), b)"),
            vec!["(", "(", "a", ")", "b", ")"]
        );
        assert_eq!(token_strings("()"), vec!["(", ")"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,, ").is_empty());
    }

    #[test]
    fn test_token_classification() {
        let tokens = tokenize("f(x)");
        assert!(!tokens[0].is_open());
        assert!(tokens[1].is_open());
        assert_eq!(tokens[2], "x");
        assert!(tokens[3].is_close());
    }
}
