//! Pluggable regex matching strategy
//!
//! All pattern and format validators route matching through one
//! [`RegexStrategy`], so an embedder can swap the engine without touching any
//! validator logic. The strategy is carried by the [`Validator`](crate::Validator)
//! factory and copied into every validator it builds.
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use tracing::debug;

/// Full-string pattern matching with capture extraction
///
/// Implementations must be safe to call concurrently.
pub trait RegexStrategy: Send + Sync + fmt::Debug {
    /// Match `value` against `pattern` as a whole
    ///
    /// Returns `Ok(None)` when it does not match and `Ok(Some(groups))` when
    /// it does, with one entry per capture group in left-to-right order
    /// (group 0 excluded). A pattern the engine rejects is an error.
    fn captures(&self, pattern: &str, value: &str) -> Result<Option<Vec<String>>>;
}

/// The built-in strategy backed by the `regex` crate
///
/// Patterns are anchored at both ends and compiled once per distinct pattern.
/// Optional groups that did not participate in the match are returned as
/// empty strings.
#[derive(Debug, Default)]
pub struct DefaultRegexStrategy {
    cache: RwLock<HashMap<String, Regex>>,
}

impl DefaultRegexStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    fn compiled(&self, pattern: &str) -> Result<Regex> {
        if let Ok(cache) = self.cache.read() {
            if let Some(regex) = cache.get(pattern) {
                return Ok(regex.clone());
            }
        }

        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .map_err(|e| Error::invalid_pattern(pattern, e))?;
        debug!(pattern, "compiled regex");

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(pattern.to_string(), regex.clone());
        }
        Ok(regex)
    }

    /// Number of compiled patterns currently cached
    pub fn cached_patterns(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }
}

impl RegexStrategy for DefaultRegexStrategy {
    fn captures(&self, pattern: &str, value: &str) -> Result<Option<Vec<String>>> {
        let regex = self.compiled(pattern)?;
        Ok(regex.captures(value).map(|caps| {
            caps.iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect()
        }))
    }
}

/// Adapter turning a thread-safe closure into a [`RegexStrategy`]
pub struct FnStrategy<F> {
    func: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&str, &str) -> Result<Option<Vec<String>>> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnStrategy")
    }
}

impl<F> RegexStrategy for FnStrategy<F>
where
    F: Fn(&str, &str) -> Result<Option<Vec<String>>> + Send + Sync,
{
    fn captures(&self, pattern: &str, value: &str) -> Result<Option<Vec<String>>> {
        (self.func)(pattern, value)
    }
}

static DEFAULT_STRATEGY: OnceLock<Arc<DefaultRegexStrategy>> = OnceLock::new();

/// The process-wide default strategy, shared so its pattern cache is shared too
pub fn default_strategy() -> Arc<dyn RegexStrategy> {
    DEFAULT_STRATEGY
        .get_or_init(|| Arc::new(DefaultRegexStrategy::new()))
        .clone()
}
