pub mod command;
pub mod string_completer;

use crate::comma_config_directory;
use crate::interpreter::Interpreter;
use crate::repl::command::CommandCompleter;
use crate::repl::command::Commands;
use crate::repl::string_completer::StringCompleter;
use crate::COMMA_VERSION;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::ValidationContext;
use rustyline::validate::ValidationResult;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::borrow::Cow;

pub struct Repl {
    interpreter: Interpreter,
    commands: Commands,
    editor: Editor<ReplHelper>,
}

pub struct ReplHelper {
    bindings_completer: StringCompleter,
    command_completer: CommandCompleter,
    bracket_validator: rustyline::validate::MatchingBracketValidator,
    bracket_highlighter: rustyline::highlight::MatchingBracketHighlighter,
}

impl ReplHelper {
    pub fn new(interpreter: &Interpreter) -> Self {
        Self {
            bindings_completer: StringCompleter::from(interpreter.binding_names()),
            command_completer: CommandCompleter::new(),
            bracket_validator: rustyline::validate::MatchingBracketValidator::new(),
            bracket_highlighter: rustyline::highlight::MatchingBracketHighlighter::new(),
        }
    }
}

impl Helper for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context) -> Option<Self::Hint> {
        None
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.command_completer.complete(line, pos, ctx)?;

        if !matches.is_empty() {
            return Ok((start, matches));
        }

        self.bindings_completer.complete(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.bracket_highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        self.bracket_highlighter.highlight_char(line, pos)
    }
}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        self.bracket_validator.validate(ctx)
    }
}

impl Repl {
    pub fn new(interpreter: Interpreter) -> anyhow::Result<Self> {
        Self::create_directories()?;

        let editor = Editor::<ReplHelper>::with_config(Self::default_config());
        let commands = Commands::new();

        Ok(Self {
            interpreter,
            editor,
            commands,
        })
    }

    // main read-eval-print loop
    pub fn run_loop(&mut self) -> anyhow::Result<()> {
        if self.editor.load_history(&Self::history_path()).is_err() {
            log::debug!("no previous history at {:?}", Self::history_path());
        }
        self.banner();

        loop {
            let helper = ReplHelper::new(&self.interpreter);
            self.editor.set_helper(Some(helper));

            match self.editor.readline(&self.prompt()) {
                Ok(input) if input.trim().is_empty() => (),
                Ok(input) => {
                    if let Err(e) = self.handle_input(&input) {
                        eprintln!("{}", e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.editor.save_history(&Self::history_path())?;
        Ok(())
    }

    fn banner(&self) {
        println!("COMMA - expressions, separated by commas");
        println!("Version: {}\n", COMMA_VERSION);
        println!("Type :help for help.");
    }

    fn handle_input(&mut self, input: &str) -> anyhow::Result<()> {
        if !self.commands.dispatch(input, &mut self.interpreter)? {
            self.eval(input)
        }
        Ok(())
    }

    fn eval(&mut self, source: &str) {
        match self.interpreter.run_string(source) {
            Ok(v) => println!("{}", self.interpreter.write(&v)),
            Err(e) => eprintln!("{}", e),
        }
    }

    #[inline]
    fn prompt(&self) -> String {
        String::from(", ")
    }

    fn default_config() -> rustyline::config::Config {
        let config_builder = rustyline::config::Config::builder();

        config_builder
            .auto_add_history(true)
            .history_ignore_dups(true)
            .history_ignore_space(false)
            .max_history_size(500)
            .completion_prompt_limit(100)
            .build()
    }

    fn history_path() -> std::path::PathBuf {
        Self::config_dir().join("history")
    }

    #[inline]
    fn create_directories() -> anyhow::Result<()> {
        std::fs::create_dir_all(Self::config_dir())?;

        if !Self::history_path().exists() {
            std::fs::File::create(Self::history_path())?;
        }

        Ok(())
    }

    #[inline]
    fn config_dir() -> std::path::PathBuf {
        comma_config_directory().join("repl")
    }
}
