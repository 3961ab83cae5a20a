use super::string_completer::StringCompleter;
use crate::interpreter::{Interpreter, Setting};
use crate::reader;
use anyhow::anyhow;
use rustyline::completion::{Completer, Pair};
use rustyline::Context;

const COMMANDS: &[(&str, &str)] = &[
    (":help", "Show help on the available commands"),
    (":set (+|-)setting", "Enable or disable a setting"),
    (":settings", "Show the values of all settings"),
    (":tokens input", "Show the tokens of `input`"),
    (":read input", "Show how `input` is read"),
    (":env", "List the names bound in the global environment"),
];

pub struct Commands;

impl Commands {
    pub fn new() -> Self {
        Self {}
    }

    /// Run `input` if it is a command. Returns false for anything else.
    pub fn dispatch(&self, input: &str, interpreter: &mut Interpreter) -> anyhow::Result<bool> {
        let input = input.trim();

        if !input.starts_with(':') {
            return Ok(false);
        }

        let (command, argument) = match input.find(char::is_whitespace) {
            Some(idx) => (&input[..idx], input[idx..].trim()),
            None => (input, ""),
        };

        match (command, argument) {
            (":help", "") => self.handle_help(),
            (":set", argument) if !argument.is_empty() => self.handle_set(argument, interpreter)?,
            (":settings", "") => self.handle_settings(interpreter),
            (":tokens", argument) => println!("{}", self.tokens(argument)),
            (":read", argument) => println!("{}", self.read(argument, interpreter)?),
            (":env", "") => println!("{}", interpreter.binding_names().join(" ")),
            _ => return Err(anyhow!("Invalid command")),
        }

        Ok(true)
    }

    fn handle_help(&self) {
        println!("Available commands: ");
        for (usage, description) in COMMANDS {
            self.display_help(usage, description);
        }
    }

    fn handle_set(&self, setting: &str, interpreter: &mut Interpreter) -> anyhow::Result<()> {
        if let Some(name) = setting.strip_prefix('+') {
            interpreter.settings.enable(self.parse_setting(name)?);
            Ok(())
        } else if let Some(name) = setting.strip_prefix('-') {
            interpreter.settings.disable(self.parse_setting(name)?);
            Ok(())
        } else {
            Err(anyhow!(
                "Setting must be a known setting and prefixed with either + or -"
            ))
        }
    }

    fn parse_setting(&self, input: &str) -> anyhow::Result<Setting> {
        input.parse::<Setting>().map_err(|e| anyhow!(e))
    }

    fn handle_settings(&self, interpreter: &Interpreter) {
        let info = interpreter
            .settings
            .as_vec()
            .iter()
            .map(|(s, f)| format!("{}: {}", s, if *f { "enabled" } else { "disabled" }))
            .collect::<Vec<_>>()
            .join(" ");

        println!("Settings+> {}", info);
    }

    fn tokens(&self, input: &str) -> String {
        let tokens = reader::tokenize(input);
        format!("{:?}", tokens.iter().map(|t| t.as_str()).collect::<Vec<_>>())
    }

    fn read(&self, input: &str, interpreter: &Interpreter) -> anyhow::Result<String> {
        let term = interpreter.reader().parse(input)?;
        Ok(interpreter.write_toplevel(&term))
    }

    #[inline]
    fn display_help(&self, usage: &str, description: &str) {
        println!("{:<25} {}", usage, description);
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::new()
    }
}

/// Completes command names, but only at the start of the line.
pub struct CommandCompleter {
    names: StringCompleter,
}

impl CommandCompleter {
    pub fn new() -> Self {
        let names = COMMANDS
            .iter()
            .filter_map(|(usage, _)| usage.split_whitespace().next())
            .collect::<Vec<_>>();

        Self {
            names: StringCompleter::from(names),
        }
    }
}

impl Default for CommandCompleter {
    fn default() -> Self {
        CommandCompleter::new()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if line.starts_with(':') && !line[..pos].contains(char::is_whitespace) {
            self.names.complete(&line[..pos], pos, ctx)
        } else {
            Ok((pos, vec![]))
        }
    }
}
