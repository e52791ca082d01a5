//! Validation module: primitive, format and schema validators
//!
//! - **Primitive validators** (`number`, `string`): stateless checks over a
//!   single value with an optional error-reporting variant
//! - **Format validators** (`format`): fixed grammars such as email, UUID,
//!   URL, date-time, IP and MAC addresses
//! - **Schema builder** (`schema`): binds validators to record fields and
//!   produces path-qualified errors
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod format;
pub mod matcher;
pub mod number;
pub mod schema;
pub mod string;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use base::{Constraint, RenderValue, ValidationContext};
pub use error::{ValidationError, ValidationErrors};
pub use format::{
    DateTimeOffset, DateTimeValidator, Format, FormatValidator, IpVersion, UrlProtocol, UrlSecurity,
};
pub use matcher::{default_strategy, DefaultRegexStrategy, FnStrategy, RegexStrategy};
pub use number::{
    NumberBetweenValidator, NumberGreaterOrEqualValidator, NumberGreaterThanValidator,
    NumberLessOrEqualValidator, NumberLessThanValidator, NumberLiteralValidator,
    NumberMultipleOfValidator, NumberValidator, Numeric,
};
pub use schema::{FieldRule, SchemaBuilder};
pub use string::{
    StringEndsWithValidator, StringIncludesValidator, StringLengthBetweenValidator,
    StringLengthMaxValidator, StringLengthMinValidator, StringLengthValidator,
    StringLiteralValidator, StringRegexValidator, StringStartsWithValidator, StringValidator,
};

/// Validation configuration for schema validation calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Path prefix for every error; empty means no prefix
    pub root_label: String,
    /// Whether to stop on first error or collect all errors
    pub stop_on_error: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            root_label: String::new(),
            stop_on_error: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration that evaluates every binding
    pub fn collect_all() -> Self {
        Self::default()
    }

    /// Create a configuration that stops at the first failing check
    pub fn fail_fast() -> Self {
        Self {
            stop_on_error: true,
            ..Self::default()
        }
    }

    /// Set the root label
    pub fn with_root<S: Into<String>>(mut self, root_label: S) -> Self {
        self.root_label = root_label.into();
        self
    }

    /// Enable or disable stop-on-error
    pub fn with_stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = stop_on_error;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}
