// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::fmt::Write;

use crate::descriptor::TestDescriptor;
use crate::request::TestSelectionRequest;

use super::{RequestFormatter, SelectionSummary};

/// Text format formatter: one selector per line, then a summary.
pub struct TextFormatter;

impl RequestFormatter for TextFormatter {
    fn format(&self, request: &TestSelectionRequest<TestDescriptor>) -> anyhow::Result<String> {
        let summary = SelectionSummary::of(request);
        if summary.total() == 0 {
            return Ok("no tests selected".to_string());
        }

        let mut out = String::new();
        for descriptor in request.operation_descriptors() {
            writeln!(out, "{}", descriptor)?;
        }
        write!(
            out,
            "{} selected: {}, {}, {}",
            summary.total(),
            counted(summary.tasks, "task", "tasks"),
            counted(summary.classes, "class", "classes"),
            counted(summary.methods, "method", "methods"),
        )?;
        Ok(out)
    }
}

fn counted(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}
