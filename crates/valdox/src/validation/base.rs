//! Base constraint trait and common utilities
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{ValidationError, ValidationErrors};
use crate::validation::ValidationConfig;
use tracing::trace;

/// Textual form of a value as it appears in error messages
pub trait RenderValue {
    /// Render the value; strings are double-quoted, numbers use `Display`
    fn render(&self) -> String;
}

impl RenderValue for str {
    fn render(&self) -> String {
        format!("\"{}\"", self)
    }
}

/// A fixed, immutable check over a single value
///
/// Every primitive and format validator implements this trait. Implementors
/// hold no mutable state, so one instance can be shared across threads and
/// reused for any number of calls.
pub trait Constraint: Send + Sync {
    /// The type of value being validated
    type Value: RenderValue + ?Sized;

    /// Whether `value` satisfies the constraint
    fn test(&self, value: &Self::Value) -> bool;

    /// Human-readable description of the constraint, used after "expected"
    fn expected(&self) -> String;

    /// Build the error for `value` at `path`, or `None` if it is valid
    fn explain(&self, value: &Self::Value, path: &str) -> Option<ValidationError> {
        if self.test(value) {
            None
        } else {
            Some(ValidationError::new(path, value.render(), self.expected()))
        }
    }

    /// Test `value` and append one error to `errors` when it fails
    fn validate(&self, value: &Self::Value, path: &str, errors: &mut ValidationErrors) -> bool {
        match self.explain(value, path) {
            None => true,
            Some(error) => {
                trace!(path = %error.path, expected = %error.expected, "constraint not satisfied");
                errors.add(error);
                false
            }
        }
    }
}

/// Traversal state for one schema validation call
///
/// Carries the current path plus the stop conditions. Child contexts share
/// the stop conditions and extend the path.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Current dotted/indexed path; empty at an unlabelled root
    pub path: String,
    /// Abort the whole traversal at the first failing check
    pub stop_on_error: bool,
    /// Abort once this many errors were appended during the call (0 = unlimited)
    pub max_errors: usize,
    baseline: usize,
}

impl ValidationContext {
    /// Create a root context; `baseline` is the error count before the call
    pub fn new(config: &ValidationConfig, baseline: usize) -> Self {
        Self {
            path: config.root_label.clone(),
            stop_on_error: config.stop_on_error,
            max_errors: config.max_errors,
            baseline,
        }
    }

    /// Create a child context with updated path
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        let path = if self.path.is_empty() {
            path_segment.as_ref().to_string()
        } else {
            format!("{}.{}", self.path, path_segment.as_ref())
        };

        Self {
            path,
            ..self.clone()
        }
    }

    /// Create a child context for a sequence index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
            ..self.clone()
        }
    }

    /// Number of errors appended since the call started
    pub fn appended(&self, errors: &ValidationErrors) -> usize {
        errors.len().saturating_sub(self.baseline)
    }

    /// Whether traversal must stop after a failure
    pub fn should_stop(&self, errors: &ValidationErrors) -> bool {
        self.stop_on_error || (self.max_errors > 0 && self.appended(errors) >= self.max_errors)
    }
}
