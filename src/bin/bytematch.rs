//! Bytematch CLI Binary
//!
//! Command-line interface for byte-level file similarity reporting.

use bytematch::logging;
use bytematch::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(Some(&cli.logging_config())) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = CliContext::new(cli.actual.clone(), cli.expected.clone());
    match context.execute() {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
