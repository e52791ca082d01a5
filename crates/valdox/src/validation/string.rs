//! String validators: length, literal sets, substrings and patterns
//!
//! Lengths count Unicode scalar values, not bytes.
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::validation::base::{Constraint, RenderValue};
use crate::validation::error::{ValidationError, ValidationErrors};
use crate::validation::matcher::RegexStrategy;
use std::sync::Arc;
use tracing::debug;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Valid iff the length lies in `[min, max]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLengthBetweenValidator {
    pub min: usize,
    pub max: usize,
}

impl Constraint for StringLengthBetweenValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        let len = char_len(value);
        len >= self.min && len <= self.max
    }

    fn expected(&self) -> String {
        format!("length between {} and {}", self.min, self.max)
    }
}

/// Valid iff the length is at least `min`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLengthMinValidator {
    pub min: usize,
}

impl Constraint for StringLengthMinValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        char_len(value) >= self.min
    }

    fn expected(&self) -> String {
        format!("length >= {}", self.min)
    }
}

/// Valid iff the length is at most `max`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLengthMaxValidator {
    pub max: usize,
}

impl StringLengthMaxValidator {
    /// Truncate `value` to its first `max` characters
    pub fn crop<'a>(&self, value: &'a str) -> &'a str {
        match value.char_indices().nth(self.max) {
            Some((end, _)) => &value[..end],
            None => value,
        }
    }
}

impl Constraint for StringLengthMaxValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        char_len(value) <= self.max
    }

    fn expected(&self) -> String {
        format!("length <= {}", self.max)
    }
}

/// Valid iff the value equals one of a fixed set (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteralValidator {
    pub literals: Vec<String>,
}

impl Constraint for StringLiteralValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        self.literals.iter().any(|lit| lit == value)
    }

    fn expected(&self) -> String {
        let quoted: Vec<String> = self.literals.iter().map(|lit| format!("\"{}\"", lit)).collect();
        format!("one of [{}]", quoted.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringStartsWithValidator {
    pub prefix: String,
}

impl Constraint for StringStartsWithValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        value.starts_with(self.prefix.as_str())
    }

    fn expected(&self) -> String {
        format!("to start with \"{}\"", self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEndsWithValidator {
    pub suffix: String,
}

impl Constraint for StringEndsWithValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        value.ends_with(self.suffix.as_str())
    }

    fn expected(&self) -> String {
        format!("to end with \"{}\"", self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringIncludesValidator {
    pub substring: String,
}

impl Constraint for StringIncludesValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        value.contains(self.substring.as_str())
    }

    fn expected(&self) -> String {
        format!("to include \"{}\"", self.substring)
    }
}

/// Valid iff the whole value matches a regular expression
///
/// Matching is delegated to the [`RegexStrategy`] this validator was built
/// with.
#[derive(Debug, Clone)]
pub struct StringRegexValidator {
    pattern: String,
    strategy: Arc<dyn RegexStrategy>,
}

impl StringRegexValidator {
    /// Build a validator, rejecting patterns the strategy cannot compile
    ///
    /// Calls `strategy` once with an empty value to surface pattern errors.
    pub fn new<P: Into<String>>(pattern: P, strategy: Arc<dyn RegexStrategy>) -> Result<Self> {
        let pattern = pattern.into();
        strategy.captures(&pattern, "")?;
        Ok(Self { pattern, strategy })
    }

    /// Build a validator for a built-in pattern known to compile
    pub(crate) fn trusted(pattern: String, strategy: Arc<dyn RegexStrategy>) -> Self {
        Self { pattern, strategy }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Capture groups of a successful match, `None` when `value` does not match
    pub fn captures(&self, value: &str) -> Option<Vec<String>> {
        match self.strategy.captures(&self.pattern, value) {
            Ok(captures) => captures,
            Err(err) => {
                debug!(pattern = %self.pattern, error = %err, "regex strategy failed, treating as no match");
                None
            }
        }
    }

    /// Like [`captures`](Self::captures), appending an error on failure
    pub fn captures_into(
        &self,
        value: &str,
        path: &str,
        errors: &mut ValidationErrors,
    ) -> Option<Vec<String>> {
        let captures = self.captures(value);
        if captures.is_none() {
            errors.add(ValidationError::new(path, value.render(), self.expected()));
        }
        captures
    }
}

impl Constraint for StringRegexValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        self.captures(value).is_some()
    }

    fn expected(&self) -> String {
        format!("to match regex /{}/", self.pattern)
    }
}

/// Factory for string length validators
#[derive(Debug, Clone, Copy, Default)]
pub struct StringLengthValidator;

impl StringLengthValidator {
    pub fn between(&self, min: usize, max: usize) -> StringLengthBetweenValidator {
        StringLengthBetweenValidator { min, max }
    }

    pub fn min(&self, min: usize) -> StringLengthMinValidator {
        StringLengthMinValidator { min }
    }

    pub fn max(&self, max: usize) -> StringLengthMaxValidator {
        StringLengthMaxValidator { max }
    }
}

/// Factory for string validators
///
/// Pattern and format validators built here carry this factory's regex
/// strategy.
#[derive(Debug, Clone)]
pub struct StringValidator {
    pub(crate) strategy: Arc<dyn RegexStrategy>,
}

impl StringValidator {
    pub fn new(strategy: Arc<dyn RegexStrategy>) -> Self {
        Self { strategy }
    }

    /// Length validators
    pub fn length(&self) -> StringLengthValidator {
        StringLengthValidator
    }

    pub fn literals<I, S>(&self, literals: I) -> StringLiteralValidator
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StringLiteralValidator {
            literals: literals.into_iter().map(Into::into).collect(),
        }
    }

    pub fn starts_with<S: Into<String>>(&self, prefix: S) -> StringStartsWithValidator {
        StringStartsWithValidator {
            prefix: prefix.into(),
        }
    }

    pub fn ends_with<S: Into<String>>(&self, suffix: S) -> StringEndsWithValidator {
        StringEndsWithValidator {
            suffix: suffix.into(),
        }
    }

    pub fn includes<S: Into<String>>(&self, substring: S) -> StringIncludesValidator {
        StringIncludesValidator {
            substring: substring.into(),
        }
    }

    /// Generic pattern validator; fails if the strategy rejects `pattern`
    ///
    /// The pattern is checked up front by running the strategy once against
    /// the empty string, so a custom strategy is invoked during construction.
    pub fn regex<P: Into<String>>(&self, pattern: P) -> Result<StringRegexValidator> {
        StringRegexValidator::new(pattern, self.strategy.clone())
    }
}
