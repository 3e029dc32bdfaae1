//! # slotted
//!
//! Command-line front end for `slotted` variant tables: resolve options into
//! class strings, describe a table's axes and slots, or validate a YAML table
//! before shipping it.
//!
//! Log output goes to stderr. `-v` enables debug events, `-vv` trace events;
//! without a flag the `SLOTTED_LOG` environment variable is honored as an
//! `EnvFilter` directive.

mod args;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("SLOTTED_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run(&cli.command) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
