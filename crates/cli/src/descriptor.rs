// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test operation descriptors.
//!
//! A [`TestDescriptor`] names one unit of test work at one of three
//! granularities. The text form is used on the command line:
//!
//! - `:app:test` selects every test run by the task
//! - `:app:test/org.example.ParserTest` selects one test class
//! - `:app:test/org.example.ParserTest#parsesEmptyInput` selects one method

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between the task path and the class name.
const CLASS_SEPARATOR: char = '/';

/// Separator between the class name and the method name.
const METHOD_SEPARATOR: char = '#';

/// Errors from parsing a descriptor's text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error(
        "invalid task path `{task}`: task paths start with ':' and contain no '/', '#' or whitespace"
    )]
    InvalidTask { task: String },

    #[error("invalid class name `{class}`: class names contain no '/', '#' or whitespace")]
    InvalidClass { class: String },

    #[error("invalid method name `{method}`: method names have no surrounding whitespace")]
    InvalidMethod { method: String },

    #[error("missing class name in `{input}`")]
    EmptyClass { input: String },

    #[error("missing method name in `{input}`")]
    EmptyMethod { input: String },

    #[error("method given without a class in `{input}`")]
    MethodWithoutClass { input: String },
}

/// Granularity of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Task,
    Class,
    Method,
}

impl DescriptorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptorKind::Task => "task",
            DescriptorKind::Class => "class",
            DescriptorKind::Method => "method",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selected test operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TestDescriptor {
    /// All tests executed by a test task.
    Task { task: String },
    /// All test methods of a class.
    Class { task: String, class: String },
    /// A single test method.
    Method {
        task: String,
        class: String,
        method: String,
    },
}

/// The constructors do not validate; only descriptors built from valid names
/// render to text that parses back to the same descriptor.
impl TestDescriptor {
    pub fn task(task: impl Into<String>) -> Self {
        TestDescriptor::Task { task: task.into() }
    }

    pub fn class(task: impl Into<String>, class: impl Into<String>) -> Self {
        TestDescriptor::Class {
            task: task.into(),
            class: class.into(),
        }
    }

    pub fn method(
        task: impl Into<String>,
        class: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        TestDescriptor::Method {
            task: task.into(),
            class: class.into(),
            method: method.into(),
        }
    }

    /// Path of the task that runs the selected tests.
    pub fn task_path(&self) -> &str {
        match self {
            TestDescriptor::Task { task }
            | TestDescriptor::Class { task, .. }
            | TestDescriptor::Method { task, .. } => task,
        }
    }

    pub fn kind(&self) -> DescriptorKind {
        match self {
            TestDescriptor::Task { .. } => DescriptorKind::Task,
            TestDescriptor::Class { .. } => DescriptorKind::Class,
            TestDescriptor::Method { .. } => DescriptorKind::Method,
        }
    }
}

/// Whether `task` looks like a task path (`:project:task`).
pub(crate) fn is_task_path(task: &str) -> bool {
    task.len() > 1 && task.starts_with(':') && !has_separator_or_space(task)
}

/// Whether `class` can sit between the separators of the text form.
pub(crate) fn is_class_name(class: &str) -> bool {
    !class.is_empty() && !has_separator_or_space(class)
}

/// Whether `method` survives the text form unchanged (it is trimmed on parse).
pub(crate) fn is_method_name(method: &str) -> bool {
    !method.is_empty() && method.trim() == method
}

fn has_separator_or_space(name: &str) -> bool {
    name.contains([CLASS_SEPARATOR, METHOD_SEPARATOR]) || name.contains(char::is_whitespace)
}

impl FromStr for TestDescriptor {
    type Err = DescriptorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let Some((task, rest)) = input.split_once(CLASS_SEPARATOR) else {
            if input.contains(METHOD_SEPARATOR) {
                return Err(DescriptorError::MethodWithoutClass {
                    input: input.to_string(),
                });
            }
            check_task(input)?;
            return Ok(TestDescriptor::task(input));
        };

        check_task(task)?;
        let (class, method) = match rest.split_once(METHOD_SEPARATOR) {
            Some((class, method)) => (class, Some(method)),
            None => (rest, None),
        };
        if class.is_empty() {
            return Err(DescriptorError::EmptyClass {
                input: input.to_string(),
            });
        }
        if !is_class_name(class) {
            return Err(DescriptorError::InvalidClass {
                class: class.to_string(),
            });
        }

        match method {
            None => Ok(TestDescriptor::class(task, class)),
            Some("") => Err(DescriptorError::EmptyMethod {
                input: input.to_string(),
            }),
            Some(method) if !is_method_name(method) => Err(DescriptorError::InvalidMethod {
                method: method.to_string(),
            }),
            Some(method) => Ok(TestDescriptor::method(task, class, method)),
        }
    }
}

fn check_task(task: &str) -> Result<(), DescriptorError> {
    if is_task_path(task) {
        Ok(())
    } else {
        Err(DescriptorError::InvalidTask {
            task: task.to_string(),
        })
    }
}

impl fmt::Display for TestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestDescriptor::Task { task } => f.write_str(task),
            TestDescriptor::Class { task, class } => {
                write!(f, "{task}{CLASS_SEPARATOR}{class}")
            }
            TestDescriptor::Method {
                task,
                class,
                method,
            } => write!(f, "{task}{CLASS_SEPARATOR}{class}{METHOD_SEPARATOR}{method}"),
        }
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
