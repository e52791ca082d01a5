//! Validation error types: a single failed check and the ordered error list
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One failed constraint check, qualified by the path of the offending value
///
/// The rendered form is stable and is the contract callers assert against:
/// `ValidationError: '<path>' received <value>, expected <constraint>.`
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("ValidationError: '{path}' received {received}, expected {expected}.")]
pub struct ValidationError {
    /// Dotted/indexed location of the value, e.g. `company.owner.tags[2]`
    pub path: String,
    /// The offending value as rendered text (strings are quoted)
    pub received: String,
    /// Description of the constraint that was not satisfied
    pub expected: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new<P, R, E>(path: P, received: R, expected: E) -> Self
    where
        P: Into<String>,
        R: Into<String>,
        E: Into<String>,
    {
        Self {
            path: path.into(),
            received: received.into(),
            expected: expected.into(),
        }
    }
}

/// Ordered list of validation errors, in evaluation order
///
/// The list is append-only during a validation call. Callers own it and may
/// reuse it across calls by clearing it in between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s) occurred:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create a new, empty error list
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Append an error to the list
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get the error at `index`
    pub fn get(&self, index: usize) -> Option<&ValidationError> {
        self.errors.get(index)
    }

    /// Iterate over the errors in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Remove all errors so the list can be reused for another call
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Rendered messages, one per error, in insertion order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Whether any error's path contains `fragment`
    pub fn contains_path(&self, fragment: &str) -> bool {
        self.errors.iter().any(|e| e.path.contains(fragment))
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
