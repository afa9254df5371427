// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::descriptor::TestDescriptor;

/// Build and inspect test selection requests
#[derive(Parser)]
#[command(name = "testsel")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific selection file
    #[arg(short = 'C', long = "config", global = true, env = "TESTSEL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a selection request and print it
    Plan(PlanArgs),
    /// Write a template testsel.toml
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct PlanArgs {
    /// Extra selectors: `:task`, `:task/Class` or `:task/Class#method`
    #[arg(value_name = "SELECTOR")]
    pub selectors: Vec<TestDescriptor>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Ignore any selection file, including one given with --config
    #[arg(long)]
    pub no_config: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing testsel.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
