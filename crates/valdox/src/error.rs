//! Error types for validator configuration
//!
//! Ordinary invalid input is never an error here: it is reported through
//! [`ValidationErrors`](crate::validation::ValidationErrors). This type covers
//! misconfiguration only, such as a pattern the regex engine rejects.
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised while building or repairing with validators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The regex engine rejected a pattern
    #[error("Invalid pattern /{pattern}/: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: String,
    },

    /// A clamp needed to step past an exclusive bound that has no representable neighbour
    #[error("Cannot clamp {value} past exclusive bound {bound}: no adjacent value exists")]
    Unclampable {
        value: String,
        bound: String,
    },
}

impl Error {
    /// Create an invalid pattern error
    pub fn invalid_pattern<P, R>(pattern: P, reason: R) -> Self
    where
        P: Into<String>,
        R: ToString,
    {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an unclampable error from the offending value and bound
    pub fn unclampable<V, B>(value: V, bound: B) -> Self
    where
        V: ToString,
        B: ToString,
    {
        Self::Unclampable {
            value: value.to_string(),
            bound: bound.to_string(),
        }
    }
}
