// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `testsel init` command implementation.

use anyhow::Context;

use testsel::cli::InitArgs;
use testsel::config::{CONFIG_FILE, TEMPLATE};
use testsel::error::ExitCode;

/// Write a template selection file into the current directory.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join(CONFIG_FILE);

    if path.exists() && !args.force {
        eprintln!("{} already exists (use --force to overwrite)", CONFIG_FILE);
        return Ok(ExitCode::ConfigError);
    }

    std::fs::write(&path, TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", CONFIG_FILE);
    Ok(ExitCode::Success)
}
