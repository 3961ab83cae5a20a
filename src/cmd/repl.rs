use crate::interpreter::Interpreter;
use crate::repl::Repl;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "Start the REPL")]
pub struct Opts {}

pub fn execute(_opts: &Opts, max_depth: usize) -> anyhow::Result<()> {
    let mut repl = Repl::new(Interpreter::with_max_depth(max_depth))?;
    repl.run_loop()
}
