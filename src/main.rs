//! CLI binary for the todo store.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the
//! library.

use clap::Parser;
use std::process::ExitCode;
use todo_store::cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
