// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `testsel plan` command implementation.
//!
//! Builds a request from the selection file and command-line selectors,
//! then prints it.

use std::io::Write;

use anyhow::Context;

use testsel::cli::{Cli, PlanArgs};
use testsel::config;
use testsel::discovery;
use testsel::error::ExitCode;
use testsel::report;
use testsel::request::TestSelectionRequest;

/// Run the plan command.
pub fn run(cli: &Cli, args: &PlanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config_path = if args.no_config {
        None
    } else {
        match &cli.config {
            Some(path) => Some(cwd.join(path)),
            None => discovery::find_config(&cwd),
        }
    };

    // Selection file entries first, then command-line selectors
    let mut descriptors = match config_path {
        Some(path) => {
            tracing::debug!("using selection file {}", path.display());
            config::load_with_warnings(&path)?
                .into_request()
                .with_context(|| format!("invalid selection in {}", path.display()))?
                .into_descriptors()
        }
        None => {
            tracing::debug!("no selection file");
            Vec::new()
        }
    };
    descriptors.extend(args.selectors.iter().cloned());

    let request = TestSelectionRequest::new(descriptors);
    tracing::debug!(
        "selected {} descriptors",
        request.operation_descriptors().len()
    );

    let output = report::format_request(args.output, &request, args.compact)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", output)?;

    Ok(ExitCode::Success)
}
