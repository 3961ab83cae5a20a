use rustc_hash::FxHashSet;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::Context;

/// Completes the word in front of the cursor from a fixed set of strings.
pub struct StringCompleter {
    strings: FxHashSet<String>,
}

impl StringCompleter {
    pub fn from<I: Into<String>>(input: Vec<I>) -> Self {
        let strings = input.into_iter().map(Into::into).collect();

        Self { strings }
    }

    fn complete_word(&self, pos: usize, word: &str) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut all_matches: Vec<Pair> = self
            .strings
            .iter()
            .filter(|known| !word.is_empty() && known.starts_with(word))
            .map(|known| Pair {
                display: known.clone(),
                replacement: known.clone(),
            })
            .collect();

        all_matches.sort_by(|a, b| a.display.cmp(&b.display));
        Ok((pos - word.len(), all_matches))
    }
}

// words end at separators: whitespace, commas and parentheses
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .rfind(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .map_or(0, |idx| idx + 1)
}

impl Completer for StringCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        self.complete_word(pos, &line[start..pos])
    }
}
