// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use testsel::cli::{Cli, Command};
use testsel::error::ExitCode;

mod cmd_init;
mod cmd_plan;

fn main() -> std::process::ExitCode {
    init_logging();

    let cli = Cli::parse();
    let result = match &cli.command {
        Some(Command::Plan(args)) => cmd_plan::run(&cli, args),
        Some(Command::Init(args)) => cmd_init::run(args),
        None => Cli::command()
            .print_help()
            .map(|()| ExitCode::Success)
            .map_err(anyhow::Error::from),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::for_error(&err).into()
        }
    }
}

/// Log to stderr, filtered by `TESTSEL_LOG` (default: warn).
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("TESTSEL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();
}
