use crate::interpreter::{self, Interpreter};
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(about = "Evaluate every line of the file specified by <input>")]
pub struct Opts {
    input: PathBuf,
}

pub fn execute(opts: &Opts, max_depth: usize) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("Can't read {}", opts.input.display()))?;
    let mut interpreter = Interpreter::with_max_depth(max_depth);
    let stdout = io::stdout();

    run_lines(&mut interpreter, &source, &mut stdout.lock())
}

/// Evaluate each non-empty line and write its result, stopping at the first error.
pub fn run_lines<W: Write>(
    interpreter: &mut Interpreter,
    source: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value = interpreter
            .run_string(line)
            .map_err(|e: interpreter::Error| anyhow::anyhow!("{} in line {}", e, idx + 1))?;
        writeln!(out, "{}", interpreter.write(&value))?;
    }

    Ok(())
}
