//! Field bindings and the schema builder
//!
//! A [`SchemaBuilder<T>`] owns an ordered list of bindings, each pairing a
//! field name, a read-only accessor into `T`, and a [`FieldRule`]: either a
//! leaf [`Constraint`] or another schema builder. Validation walks the
//! bindings in registration order and qualifies every error with the dotted
//! path of the failing value (`root.field`, `root.list[2]`,
//! `root.child.field`).
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{Constraint, ValidationContext};
use crate::validation::error::ValidationErrors;
use crate::validation::ValidationConfig;
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Anything that can validate a bound field
///
/// Implemented for every [`Constraint`] and for [`SchemaBuilder`], which is
/// what lets schemas nest to any depth.
pub trait FieldRule: Send + Sync {
    /// The type of value the rule inspects
    type Value: ?Sized;

    /// Validate `value` at `ctx.path`, appending errors and honoring the
    /// context's stop conditions. Returns true if nothing failed.
    fn check(&self, value: &Self::Value, ctx: &ValidationContext, errors: &mut ValidationErrors) -> bool;
}

impl<C: Constraint> FieldRule for C {
    type Value = C::Value;

    fn check(&self, value: &Self::Value, ctx: &ValidationContext, errors: &mut ValidationErrors) -> bool {
        self.validate(value, &ctx.path, errors)
    }
}

trait Binding<T>: Send + Sync {
    fn name(&self) -> &str;

    fn check(&self, record: &T, ctx: &ValidationContext, errors: &mut ValidationErrors) -> bool;
}

struct FieldBinding<A, R, F: ?Sized> {
    name: String,
    accessor: A,
    rule: R,
    _field: PhantomData<fn(&F)>,
}

impl<T, A, R, F> Binding<T> for FieldBinding<A, R, F>
where
    A: Fn(&T) -> &F + Send + Sync,
    R: FieldRule,
    F: Borrow<R::Value> + ?Sized,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, record: &T, ctx: &ValidationContext, errors: &mut ValidationErrors) -> bool {
        let value = (self.accessor)(record);
        self.rule.check(Borrow::<R::Value>::borrow(value), &ctx.child(&self.name), errors)
    }
}

struct VectorBinding<A, R, E> {
    name: String,
    accessor: A,
    rule: R,
    _element: PhantomData<fn(&E)>,
}

impl<T, A, R, E> Binding<T> for VectorBinding<A, R, E>
where
    A: Fn(&T) -> &[E] + Send + Sync,
    R: FieldRule,
    E: Borrow<R::Value>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, record: &T, ctx: &ValidationContext, errors: &mut ValidationErrors) -> bool {
        let field = ctx.child(&self.name);
        let mut passed = true;
        for (index, element) in (self.accessor)(record).iter().enumerate() {
            let element = Borrow::<R::Value>::borrow(element);
            if !self.rule.check(element, &field.child_index(index), errors) {
                passed = false;
                if field.should_stop(errors) {
                    break;
                }
            }
        }
        passed
    }
}

/// Ordered collection of field bindings for record type `T`
///
/// Built once, then reusable and shareable across threads for any number of
/// validation calls.
///
/// ```rust
/// use valdox::{SchemaBuilder, ValidationErrors, Validator};
///
/// struct Person {
///     age: i32,
///     name: String,
/// }
///
/// let v = Validator::new();
/// let mut schema = SchemaBuilder::new();
/// schema
///     .add("age", |p: &Person| &p.age, v.number().between(0, 120))
///     .add("name", |p: &Person| p.name.as_str(), v.string().length().between(1, 50));
///
/// let mut errors = ValidationErrors::new();
/// let person = Person { age: 150, name: String::new() };
/// assert!(!schema.validate_with(&person, "person", &mut errors, false));
/// assert_eq!(errors.len(), 2);
/// assert!(errors.messages()[0].contains("person.age"));
/// ```
pub struct SchemaBuilder<T> {
    bindings: Vec<Box<dyn Binding<T>>>,
}

impl<T> Default for SchemaBuilder<T> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for SchemaBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("fields", &self.field_names())
            .finish()
    }
}

impl<T: 'static> SchemaBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a scalar field, or a nested record when `rule` is a schema
    pub fn add<N, A, R, F>(&mut self, name: N, accessor: A, rule: R) -> &mut Self
    where
        N: Into<String>,
        A: Fn(&T) -> &F + Send + Sync + 'static,
        R: FieldRule + 'static,
        F: Borrow<R::Value> + ?Sized + 'static,
    {
        self.bindings.push(Box::new(FieldBinding {
            name: name.into(),
            accessor,
            rule,
            _field: PhantomData,
        }));
        self
    }

    /// Bind a sequence field; `rule` is applied to each element in order
    pub fn add_vector<N, A, R, E>(&mut self, name: N, accessor: A, rule: R) -> &mut Self
    where
        N: Into<String>,
        A: Fn(&T) -> &[E] + Send + Sync + 'static,
        R: FieldRule + 'static,
        E: Borrow<R::Value> + 'static,
    {
        self.bindings.push(Box::new(VectorBinding {
            name: name.into(),
            accessor,
            rule,
            _element: PhantomData,
        }));
        self
    }

    /// Owning form of [`add`](Self::add) for chained construction
    pub fn with_field<N, A, R, F>(mut self, name: N, accessor: A, rule: R) -> Self
    where
        N: Into<String>,
        A: Fn(&T) -> &F + Send + Sync + 'static,
        R: FieldRule + 'static,
        F: Borrow<R::Value> + ?Sized + 'static,
    {
        self.add(name, accessor, rule);
        self
    }

    /// Owning form of [`add_vector`](Self::add_vector) for chained construction
    pub fn with_vector<N, A, R, E>(mut self, name: N, accessor: A, rule: R) -> Self
    where
        N: Into<String>,
        A: Fn(&T) -> &[E] + Send + Sync + 'static,
        R: FieldRule + 'static,
        E: Borrow<R::Value> + 'static,
    {
        self.add_vector(name, accessor, rule);
        self
    }

    /// Whether every binding passes; stops at the first failure
    pub fn validate(&self, instance: &T) -> bool {
        let mut discarded = ValidationErrors::new();
        self.validate_with_config(instance, &ValidationConfig::fail_fast(), &mut discarded)
    }

    /// Evaluate every binding, appending all failures under `root`
    pub fn validate_into(&self, instance: &T, root: &str, errors: &mut ValidationErrors) -> bool {
        self.validate_with(instance, root, errors, false)
    }

    /// Validate under `root`, appending to `errors`
    ///
    /// With `stop_on_error` the whole traversal, including nested and
    /// sequence bindings, ends at the first failing check and exactly one
    /// error is appended.
    pub fn validate_with(
        &self,
        instance: &T,
        root: &str,
        errors: &mut ValidationErrors,
        stop_on_error: bool,
    ) -> bool {
        let config = ValidationConfig::default()
            .with_root(root)
            .with_stop_on_error(stop_on_error);
        self.validate_with_config(instance, &config, errors)
    }

    /// Validate according to `config`, appending to `errors`
    ///
    /// Returns true iff no errors were appended.
    pub fn validate_with_config(
        &self,
        instance: &T,
        config: &ValidationConfig,
        errors: &mut ValidationErrors,
    ) -> bool {
        let ctx = ValidationContext::new(config, errors.len());
        let passed = self.run(instance, &ctx, errors);
        debug!(
            root = %config.root_label,
            fields = self.bindings.len(),
            appended = ctx.appended(errors),
            passed,
            "schema validated"
        );
        passed
    }

    /// Collect every error under `root` into a fresh list
    pub fn collect_errors(&self, instance: &T, root: &str) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.validate_into(instance, root, &mut errors);
        errors
    }

    /// Ok if `instance` is valid, otherwise every error under `root`
    pub fn check(&self, instance: &T, root: &str) -> Result<(), ValidationErrors> {
        self.collect_errors(instance, root).into_result()
    }
}

impl<T> SchemaBuilder<T> {
    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Field names in registration order
    pub fn field_names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name()).collect()
    }

    fn run(&self, instance: &T, ctx: &ValidationContext, errors: &mut ValidationErrors) -> bool {
        let mut passed = true;
        for binding in &self.bindings {
            if !binding.check(instance, ctx, errors) {
                passed = false;
                if ctx.should_stop(errors) {
                    break;
                }
            }
        }
        passed
    }
}

impl<T> FieldRule for SchemaBuilder<T> {
    type Value = T;

    fn check(&self, value: &T, ctx: &ValidationContext, errors: &mut ValidationErrors) -> bool {
        self.run(value, ctx, errors)
    }
}
