use clap::{Parser, Subcommand};
use comma::cmd::{repl, run};

#[derive(Parser, Debug)]
#[clap(version, about = "The comma interpreter")]
struct Opts {
    /// Maximum nesting of reads and evaluations
    #[clap(long, default_value_t = comma::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Repl(repl::Opts),
    Run(run::Opts),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();

    match opts.command {
        Some(Command::Run(run_opts)) => run::execute(&run_opts, opts.max_depth),
        Some(Command::Repl(repl_opts)) => repl::execute(&repl_opts, opts.max_depth),
        None => repl::execute(&repl::Opts {}, opts.max_depth),
    }
}
