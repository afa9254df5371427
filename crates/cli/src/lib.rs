// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test selection requests for a build tool's test runner.
//!
//! [`TestSelectionRequest`] is the value handed from whatever builds a
//! selection to whatever executes it. The remaining modules build requests
//! from selectors and `testsel.toml`, and render them.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod report;
pub mod request;

#[cfg(test)]
pub mod test_utils;

pub use descriptor::{DescriptorError, DescriptorKind, TestDescriptor};
pub use request::{Descriptors, TestSelectionRequest};
