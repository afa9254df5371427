// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of selection requests.

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::cli::OutputFormat;
use crate::descriptor::{DescriptorKind, TestDescriptor};
use crate::request::TestSelectionRequest;

/// Descriptor counts by granularity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub tasks: usize,
    pub classes: usize,
    pub methods: usize,
}

impl SelectionSummary {
    pub fn of(request: &TestSelectionRequest<TestDescriptor>) -> Self {
        let mut summary = Self::default();
        for descriptor in request.operation_descriptors() {
            match descriptor.kind() {
                DescriptorKind::Task => summary.tasks += 1,
                DescriptorKind::Class => summary.classes += 1,
                DescriptorKind::Method => summary.methods += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.tasks + self.classes + self.methods
    }
}

/// Trait for formatting a request into an output format.
pub trait RequestFormatter {
    fn format(&self, request: &TestSelectionRequest<TestDescriptor>) -> anyhow::Result<String>;
}

/// Format a request, returning the output string.
///
/// `compact` only affects JSON output.
pub fn format_request(
    format: OutputFormat,
    request: &TestSelectionRequest<TestDescriptor>,
    compact: bool,
) -> anyhow::Result<String> {
    let formatter: Box<dyn RequestFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter { compact }),
    };
    formatter.format(request)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
