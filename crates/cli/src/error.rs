// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

use crate::config::ConfigError;
use crate::descriptor::DescriptorError;

/// Exit codes reported by the `testsel` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Bad configuration file or selector.
    ConfigError = 2,
    InternalError = 3,
}

impl ExitCode {
    /// Classify a command failure.
    ///
    /// Configuration and selector errors are user mistakes; everything else
    /// (I/O, serialization) is internal.
    pub fn for_error(err: &anyhow::Error) -> Self {
        let user_error = err.chain().any(|cause| {
            cause.downcast_ref::<ConfigError>().is_some()
                || cause.downcast_ref::<DescriptorError>().is_some()
        });
        if user_error {
            ExitCode::ConfigError
        } else {
            ExitCode::InternalError
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
