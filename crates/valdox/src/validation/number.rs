//! Numeric validators: ranges, one-sided comparisons, multiples and literal sets
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::validation::base::{Constraint, RenderValue};
use std::fmt;

/// Arithmetic value types accepted by numeric validators
///
/// Implemented for every primitive integer type and for `f32`/`f64`. `bool`
/// and `char` are deliberately not numeric.
pub trait Numeric: RenderValue + Copy + PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// The next representable value upwards, if stepping by one is defined
    fn successor(self) -> Option<Self>;

    /// The next representable value downwards, if stepping by one is defined
    fn predecessor(self) -> Option<Self>;

    /// Whether the remainder of `self / divisor` is zero
    ///
    /// A zero divisor never divides anything.
    fn divisible_by(self, divisor: Self) -> bool;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn successor(self) -> Option<Self> {
                self.checked_add(1)
            }

            fn predecessor(self) -> Option<Self> {
                self.checked_sub(1)
            }

            fn divisible_by(self, divisor: Self) -> bool {
                if divisor == 0 {
                    return false;
                }
                // `MIN % -1` overflows but is mathematically zero
                self.checked_rem(divisor).map_or(true, |r| r == 0)
            }
        }

        impl RenderValue for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn successor(self) -> Option<Self> {
                None
            }

            fn predecessor(self) -> Option<Self> {
                None
            }

            fn divisible_by(self, divisor: Self) -> bool {
                divisor != 0.0 && self % divisor == 0.0
            }
        }

        impl RenderValue for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

fn inclusivity(inclusive: bool) -> &'static str {
    if inclusive {
        "inclusive"
    } else {
        "exclusive"
    }
}

/// Valid iff the value lies between `min` and `max`, each bound inclusive or exclusive
#[derive(Debug, Clone, PartialEq)]
pub struct NumberBetweenValidator<T: Numeric> {
    pub min: T,
    pub max: T,
    pub include_min: bool,
    pub include_max: bool,
}

impl<T: Numeric> NumberBetweenValidator<T> {
    pub fn new(min: T, max: T, include_min: bool, include_max: bool) -> Self {
        Self {
            min,
            max,
            include_min,
            include_max,
        }
    }

    fn above_min(&self, value: T) -> bool {
        if self.include_min {
            value >= self.min
        } else {
            value > self.min
        }
    }

    fn below_max(&self, value: T) -> bool {
        if self.include_max {
            value <= self.max
        } else {
            value < self.max
        }
    }

    /// Pull `value` into range
    ///
    /// Values below the range become `min` (or `min + 1` when `min` is
    /// exclusive), values above become `max` (or `max - 1`). Stepping past an
    /// exclusive bound is only defined for integers; floats yield
    /// [`Error::Unclampable`].
    pub fn clamp(&self, value: T) -> Result<T> {
        if !self.above_min(value) {
            return if self.include_min {
                Ok(self.min)
            } else {
                self.min
                    .successor()
                    .ok_or_else(|| Error::unclampable(value, self.min))
            };
        }
        if !self.below_max(value) {
            return if self.include_max {
                Ok(self.max)
            } else {
                self.max
                    .predecessor()
                    .ok_or_else(|| Error::unclampable(value, self.max))
            };
        }
        Ok(value)
    }
}

impl<T: Numeric> Constraint for NumberBetweenValidator<T> {
    type Value = T;

    fn test(&self, value: &T) -> bool {
        self.above_min(*value) && self.below_max(*value)
    }

    fn expected(&self) -> String {
        if self.include_min && self.include_max {
            format!("value between {} and {}", self.min, self.max)
        } else {
            format!(
                "value between {} ({}) and {} ({})",
                self.min,
                inclusivity(self.include_min),
                self.max,
                inclusivity(self.include_max)
            )
        }
    }
}

/// Valid iff the value is strictly greater than `min`
#[derive(Debug, Clone, PartialEq)]
pub struct NumberGreaterThanValidator<T: Numeric> {
    pub min: T,
}

impl<T: Numeric> NumberGreaterThanValidator<T> {
    /// Raise `value` to the smallest valid value (`min + 1`) when it is too small
    pub fn clamp(&self, value: T) -> Result<T> {
        if value > self.min {
            Ok(value)
        } else {
            self.min
                .successor()
                .ok_or_else(|| Error::unclampable(value, self.min))
        }
    }
}

impl<T: Numeric> Constraint for NumberGreaterThanValidator<T> {
    type Value = T;

    fn test(&self, value: &T) -> bool {
        *value > self.min
    }

    fn expected(&self) -> String {
        format!("value greater than {}", self.min)
    }
}

/// Valid iff the value is greater than or equal to `min`
#[derive(Debug, Clone, PartialEq)]
pub struct NumberGreaterOrEqualValidator<T: Numeric> {
    pub min: T,
}

impl<T: Numeric> NumberGreaterOrEqualValidator<T> {
    /// Raise `value` to `min` when it is too small
    pub fn clamp(&self, value: T) -> T {
        if value >= self.min {
            value
        } else {
            self.min
        }
    }
}

impl<T: Numeric> Constraint for NumberGreaterOrEqualValidator<T> {
    type Value = T;

    fn test(&self, value: &T) -> bool {
        *value >= self.min
    }

    fn expected(&self) -> String {
        format!("value >= {}", self.min)
    }
}

/// Valid iff the value is strictly less than `max`
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLessThanValidator<T: Numeric> {
    pub max: T,
}

impl<T: Numeric> NumberLessThanValidator<T> {
    /// Lower `value` to the largest valid value (`max - 1`) when it is too large
    pub fn clamp(&self, value: T) -> Result<T> {
        if value < self.max {
            Ok(value)
        } else {
            self.max
                .predecessor()
                .ok_or_else(|| Error::unclampable(value, self.max))
        }
    }
}

impl<T: Numeric> Constraint for NumberLessThanValidator<T> {
    type Value = T;

    fn test(&self, value: &T) -> bool {
        *value < self.max
    }

    fn expected(&self) -> String {
        format!("value less than {}", self.max)
    }
}

/// Valid iff the value is less than or equal to `max`
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLessOrEqualValidator<T: Numeric> {
    pub max: T,
}

impl<T: Numeric> NumberLessOrEqualValidator<T> {
    /// Lower `value` to `max` when it is too large
    pub fn clamp(&self, value: T) -> T {
        if value <= self.max {
            value
        } else {
            self.max
        }
    }
}

impl<T: Numeric> Constraint for NumberLessOrEqualValidator<T> {
    type Value = T;

    fn test(&self, value: &T) -> bool {
        *value <= self.max
    }

    fn expected(&self) -> String {
        format!("value <= {}", self.max)
    }
}

/// Valid iff the value divides evenly by `divisor`
#[derive(Debug, Clone, PartialEq)]
pub struct NumberMultipleOfValidator<T: Numeric> {
    pub divisor: T,
}

impl<T: Numeric> Constraint for NumberMultipleOfValidator<T> {
    type Value = T;

    fn test(&self, value: &T) -> bool {
        value.divisible_by(self.divisor)
    }

    fn expected(&self) -> String {
        format!("multiple of {}", self.divisor)
    }
}

/// Valid iff the value equals one of a fixed set
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteralValidator<T: Numeric> {
    pub literals: Vec<T>,
}

impl<T: Numeric> Constraint for NumberLiteralValidator<T> {
    type Value = T;

    fn test(&self, value: &T) -> bool {
        self.literals.iter().any(|lit| lit == value)
    }

    fn expected(&self) -> String {
        let rendered: Vec<String> = self.literals.iter().map(ToString::to_string).collect();
        format!("one of [{}]", rendered.join(", "))
    }
}

/// Factory for numeric validators
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberValidator;

impl NumberValidator {
    /// Inclusive range `[min, max]`
    pub fn between<T: Numeric>(&self, min: T, max: T) -> NumberBetweenValidator<T> {
        NumberBetweenValidator::new(min, max, true, true)
    }

    /// Range with explicit bound inclusivity
    pub fn between_with<T: Numeric>(
        &self,
        min: T,
        max: T,
        include_min: bool,
        include_max: bool,
    ) -> NumberBetweenValidator<T> {
        NumberBetweenValidator::new(min, max, include_min, include_max)
    }

    pub fn greater_than<T: Numeric>(&self, min: T) -> NumberGreaterThanValidator<T> {
        NumberGreaterThanValidator { min }
    }

    pub fn greater_or_equal<T: Numeric>(&self, min: T) -> NumberGreaterOrEqualValidator<T> {
        NumberGreaterOrEqualValidator { min }
    }

    pub fn less_than<T: Numeric>(&self, max: T) -> NumberLessThanValidator<T> {
        NumberLessThanValidator { max }
    }

    pub fn less_or_equal<T: Numeric>(&self, max: T) -> NumberLessOrEqualValidator<T> {
        NumberLessOrEqualValidator { max }
    }

    pub fn multiple_of<T: Numeric>(&self, divisor: T) -> NumberMultipleOfValidator<T> {
        NumberMultipleOfValidator { divisor }
    }

    pub fn literals<T, I>(&self, literals: I) -> NumberLiteralValidator<T>
    where
        T: Numeric,
        I: IntoIterator<Item = T>,
    {
        NumberLiteralValidator {
            literals: literals.into_iter().collect(),
        }
    }
}
