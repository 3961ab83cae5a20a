extern crate im_rc;
extern crate thiserror;

pub mod cmd;
pub mod interpreter;
pub mod reader;
pub mod repl;
pub mod term;

mod stack;

#[cfg(test)]
#[macro_use(assert_matches)]
extern crate matches;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub const COMMA_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bound on nested reads and nested evaluations.
pub const DEFAULT_MAX_DEPTH: usize = 1_000;

pub fn comma_config_directory() -> std::path::PathBuf {
    match directories::ProjectDirs::from("", "", "comma") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => std::path::PathBuf::from(".comma"),
    }
}
