// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use serde_json::json;

use crate::descriptor::TestDescriptor;
use crate::request::TestSelectionRequest;

use super::RequestFormatter;

/// JSON format formatter.
pub struct JsonFormatter {
    /// Single-line output instead of pretty-printed.
    pub compact: bool,
}

impl RequestFormatter for JsonFormatter {
    fn format(&self, request: &TestSelectionRequest<TestDescriptor>) -> anyhow::Result<String> {
        let output = json!({
            "count": request.operation_descriptors().len(),
            "descriptors": request,
        });

        if self.compact {
            Ok(serde_json::to_string(&output)?)
        } else {
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}
