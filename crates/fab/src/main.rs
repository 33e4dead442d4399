//! fab - Entry Point

// Force-link fab-shapes so its auto-registrations are in the table
extern crate fab_shapes;

use std::process::ExitCode;

use clap::Parser;
use fab::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
