//! Valdox - composable value validators and schema builder
//!
//! This crate provides reusable, immutable validators for numbers and
//! strings, and a [`SchemaBuilder`] that binds them to the fields of any
//! record type:
//! - **Numbers**: ranges with clamping, one-sided comparisons, multiples, literal sets
//! - **Strings**: length with cropping, literal sets, prefix/suffix/substring, regex with captures
//! - **Formats**: email, UUID, URL, date-time, date, time, IP, MAC
//! - **Schemas**: nested and per-element validation with path-qualified errors
//!   and stop-on-error or collect-all evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use valdox::{Constraint, SchemaBuilder, ValidationErrors, Validator};
//!
//! struct Product {
//!     id: i32,
//!     tags: Vec<i32>,
//! }
//!
//! let v = Validator::new();
//!
//! // Validators work on bare values
//! let mut errors = ValidationErrors::new();
//! assert!(!v.number().between(1, 100).validate(&101, "qty", &mut errors));
//! assert_eq!(
//!     errors.messages()[0],
//!     "ValidationError: 'qty' received 101, expected value between 1 and 100."
//! );
//!
//! // ...or inside a schema
//! let schema = SchemaBuilder::new()
//!     .with_field("id", |p: &Product| &p.id, v.number().greater_than(0))
//!     .with_vector("tags", |p: &Product| p.tags.as_slice(), v.number().between(1, 100));
//!
//! let errors = schema.collect_errors(&Product { id: 1, tags: vec![0, 101, 50] }, "product");
//! assert_eq!(errors.len(), 2);
//! assert!(errors.messages()[0].contains("product.tags[0]"));
//! assert!(errors.messages()[1].contains("product.tags[1]"));
//! ```
//!
//! The library never prints; it emits `tracing` events at `debug`/`trace`
//! level only.
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod validation;
pub mod validator;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use validation::{
    Constraint, DateTimeOffset, FieldRule, Format, FormatValidator, IpVersion, Numeric,
    RegexStrategy, SchemaBuilder, UrlProtocol, UrlSecurity, ValidationConfig, ValidationError,
    ValidationErrors,
};
pub use validator::Validator;
