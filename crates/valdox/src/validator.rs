//! Top-level validator factory
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use crate::validation::matcher::{default_strategy, RegexStrategy};
use crate::validation::number::NumberValidator;
use crate::validation::string::StringValidator;
use std::sync::Arc;

/// Entry point for building validators
///
/// Exposes the `number` and `string` namespaces. The regex strategy given at
/// construction is used by every pattern and format validator built from
/// this factory.
///
/// ```rust
/// use valdox::{Constraint, Validator};
///
/// let v = Validator::new();
/// assert!(v.number().between(5, 10).test(&7));
/// assert!(!v.string().literals(["apple", "banana"]).test("Apple"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    number: NumberValidator,
    string: StringValidator,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Factory backed by the shared default regex engine
    pub fn new() -> Self {
        Self::with_regex_strategy(default_strategy())
    }

    /// Factory whose pattern validators match through `strategy`
    pub fn with_regex_strategy(strategy: Arc<dyn RegexStrategy>) -> Self {
        Self {
            number: NumberValidator,
            string: StringValidator::new(strategy),
        }
    }

    /// Numeric validators
    pub fn number(&self) -> &NumberValidator {
        &self.number
    }

    /// String and format validators
    pub fn string(&self) -> &StringValidator {
        &self.string
    }
}
