//! Sift CLI Binary
//!
//! Command-line interface for lazy listing and line scanning.

use clap::Parser;
use owo_colors::OwoColorize;
use sift::logging::init_logging;
use sift::tooling::cli::{Cli, CliContext};
use std::io::{self, IsTerminal, Write};
use std::process;

fn report(err: &anyhow::Error) {
    let label = if io::stderr().is_terminal() {
        "Error:".red().bold().to_string()
    } else {
        "Error:".to_string()
    };
    eprintln!("{} {:#}", label, err);
}

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            report(&e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&context.config().logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = context
        .execute_to(&cli.command, &mut out)
        .and_then(|()| out.flush().map_err(anyhow::Error::from));
    if let Err(e) = result {
        // A closed pipe (e.g. `sift ls . | head`) is a normal way to stop.
        if e
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
        {
            return;
        }
        report(&e);
        process::exit(1);
    }
}
