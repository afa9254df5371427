// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test selection requests.
//!
//! A [`TestSelectionRequest`] carries the descriptors of the test operations a
//! client wants executed. It is assembled once by whatever builds the selection
//! and read by whatever runs it. Nothing in between changes it.

use std::fmt;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

/// An immutable selection of test operations to execute.
///
/// `D` is the descriptor type identifying a single test operation (a task,
/// a class, a method). The request places no bounds on it and never inspects
/// it.
///
/// The request owns its descriptors: the sequence handed to [`new`] is moved
/// in, so nothing outside the request can mutate it afterwards.
///
/// [`new`]: TestSelectionRequest::new
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestSelectionRequest<D> {
    operation_descriptors: Vec<D>,
}

impl<D> TestSelectionRequest<D> {
    /// Create a request from an ordered sequence of descriptors.
    ///
    /// Accepts empty input and duplicates as-is. A `Vec` is moved in without
    /// copying.
    pub fn new(descriptors: impl Into<Vec<D>>) -> Self {
        Self {
            operation_descriptors: descriptors.into(),
        }
    }

    /// Read-only view over the selected descriptors.
    pub fn operation_descriptors(&self) -> Descriptors<'_, D> {
        Descriptors {
            inner: &self.operation_descriptors,
        }
    }

    /// Hand the descriptors over to the consumer, ending the request.
    pub fn into_descriptors(self) -> Vec<D> {
        self.operation_descriptors
    }
}

impl<D> Default for TestSelectionRequest<D> {
    fn default() -> Self {
        Self {
            operation_descriptors: Vec::new(),
        }
    }
}

impl<D> FromIterator<D> for TestSelectionRequest<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<D: fmt::Debug> fmt::Debug for TestSelectionRequest<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSelectionRequest")
            .field("operation_descriptors", &self.operation_descriptors())
            .finish()
    }
}

/// Collection view over a request's descriptors.
///
/// Supports iteration, size and membership. It deliberately offers no indexed
/// access, and consumers must not depend on iteration order.
pub struct Descriptors<'a, D> {
    inner: &'a [D],
}

impl<'a, D> Descriptors<'a, D> {
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'a, D> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    pub fn contains(&self, descriptor: &D) -> bool
    where
        D: PartialEq,
    {
        self.inner.contains(descriptor)
    }
}

impl<D> Clone for Descriptors<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Descriptors<'_, D> {}

impl<D: fmt::Debug> fmt::Debug for Descriptors<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner).finish()
    }
}

impl<'a, D> IntoIterator for Descriptors<'a, D> {
    type Item = &'a D;
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, D> IntoIterator for &Descriptors<'a, D> {
    type Item = &'a D;
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the descriptors in a [`Descriptors`] view.
pub struct Iter<'a, D> {
    inner: std::slice::Iter<'a, D>,
}

impl<'a, D> Iterator for Iter<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<D> ExactSizeIterator for Iter<'_, D> {}

impl<D> FusedIterator for Iter<'_, D> {}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
