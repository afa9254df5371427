// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection file (`testsel.toml`) parsing.
//!
//! Each `[[select]]` entry becomes one descriptor; file order is kept.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::descriptor::{TestDescriptor, is_class_name, is_method_name, is_task_path};
use crate::request::TestSelectionRequest;

/// Name of the selection file looked up by discovery.
pub const CONFIG_FILE: &str = "testsel.toml";

/// The only selection file version understood.
pub const SUPPORTED_VERSION: u32 = 1;

/// Written by `testsel init`.
pub const TEMPLATE: &str = r#"version = 1

# Each [[select]] entry selects the tests of a task, a class or a single method.
#
# [[select]]
# task = ":app:test"
#
# [[select]]
# task = ":app:test"
# class = "org.example.ParserTest"
# method = "parsesEmptyInput"
"#;

const KNOWN_KEYS: &[&str] = &["version", "select"];
const KNOWN_SELECT_KEYS: &[&str] = &["task", "class", "method"];

/// Errors from loading a selection file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported version {found} (expected {SUPPORTED_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error("select entry {entry}: invalid task path `{task}`")]
    InvalidTask { entry: usize, task: String },

    #[error("select entry {entry}: `{field}` is empty")]
    EmptyField { entry: usize, field: &'static str },

    #[error("select entry {entry}: invalid {field} name `{value}`")]
    InvalidName {
        entry: usize,
        field: &'static str,
        value: String,
    },

    #[error("select entry {entry}: `method` requires `class`")]
    MethodWithoutClass { entry: usize },
}

/// Parsed selection file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: u32,

    #[serde(default)]
    pub select: Vec<SelectEntry>,
}

/// One `[[select]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectEntry {
    pub task: String,

    #[serde(default)]
    pub class: Option<String>,

    #[serde(default)]
    pub method: Option<String>,
}

impl SelectEntry {
    /// Convert to a descriptor. `entry` is the 1-based position for errors.
    fn to_descriptor(&self, entry: usize) -> Result<TestDescriptor, ConfigError> {
        if !is_task_path(&self.task) {
            return Err(ConfigError::InvalidTask {
                entry,
                task: self.task.clone(),
            });
        }

        match (&self.class, &self.method) {
            (None, None) => Ok(TestDescriptor::task(&self.task)),
            (None, Some(_)) => Err(ConfigError::MethodWithoutClass { entry }),
            (Some(class), None) => {
                check_name(entry, "class", class, is_class_name)?;
                Ok(TestDescriptor::class(&self.task, class))
            }
            (Some(class), Some(method)) => {
                check_name(entry, "class", class, is_class_name)?;
                check_name(entry, "method", method, is_method_name)?;
                Ok(TestDescriptor::method(&self.task, class, method))
            }
        }
    }
}

/// Names must survive the selector text form, so reports read back unchanged.
fn check_name(
    entry: usize,
    field: &'static str,
    value: &str,
    valid: fn(&str) -> bool,
) -> Result<(), ConfigError> {
    if value.is_empty() {
        Err(ConfigError::EmptyField { entry, field })
    } else if !valid(value) {
        Err(ConfigError::InvalidName {
            entry,
            field,
            value: value.to_string(),
        })
    } else {
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != SUPPORTED_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
            });
        }
        Ok(())
    }

    /// Build a request holding one descriptor per entry, in file order.
    pub fn into_request(self) -> Result<TestSelectionRequest<TestDescriptor>, ConfigError> {
        self.select
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.to_descriptor(i + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(TestSelectionRequest::new)
    }
}

/// Parse and validate selection file content.
///
/// Unknown keys are reported through `tracing::warn!` and otherwise ignored.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let parse_err = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let table: toml::Table = toml::from_str(content).map_err(parse_err)?;
    for key in unknown_keys(&table) {
        tracing::warn!("{}: unknown key `{}`, ignoring", path.display(), key);
    }

    let config: Config = toml::Value::Table(table).try_into().map_err(parse_err)?;
    config.validate()?;
    tracing::debug!(
        "loaded {} with {} select entries",
        path.display(),
        config.select.len()
    );
    Ok(config)
}

/// Read, parse and validate a selection file.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_warnings(&content, path)
}

/// Dotted paths of keys not understood by [`Config`].
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown: Vec<String> = table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    if let Some(toml::Value::Array(entries)) = table.get("select") {
        for (i, entry) in entries.iter().enumerate() {
            let Some(entry) = entry.as_table() else {
                continue;
            };
            unknown.extend(
                entry
                    .keys()
                    .filter(|key| !KNOWN_SELECT_KEYS.contains(&key.as_str()))
                    .map(|key| format!("select[{}].{}", i + 1, key)),
            );
        }
    }

    unknown
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
