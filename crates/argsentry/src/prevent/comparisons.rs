//! Single-bound comparison guards
//!
//! Each guard is named for the condition it prevents: `value_greater_than`
//! rejects values greater than the bound.
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use std::cmp::Ordering;
use std::fmt::Display;

use super::{compare, Prevent};
use crate::error::{GuardError, GuardResult};

impl Prevent {
    /// Ensures `value <= must_be_less_than_or_equal_to`.
    ///
    /// # Errors
    ///
    /// [`GuardError::OutOfRange`] if the value is greater than the bound.
    pub fn value_greater_than<T>(value: T, must_be_less_than_or_equal_to: T, param_name: &str) -> GuardResult<T>
    where
        T: PartialOrd + Display,
    {
        if compare(&value, &must_be_less_than_or_equal_to) == Ordering::Greater {
            return Err(GuardError::out_of_range(
                param_name,
                format!("Value must be less than or equal to {}.", must_be_less_than_or_equal_to),
            )
            .traced());
        }

        Ok(value)
    }

    /// Ensures `value < must_be_less_than`.
    ///
    /// # Errors
    ///
    /// [`GuardError::OutOfRange`] if the value is greater than or equal to the bound.
    pub fn value_greater_than_or_equal_to<T>(value: T, must_be_less_than: T, param_name: &str) -> GuardResult<T>
    where
        T: PartialOrd + Display,
    {
        if compare(&value, &must_be_less_than) != Ordering::Less {
            return Err(GuardError::out_of_range(
                param_name,
                format!("Value must be less than {}.", must_be_less_than),
            )
            .traced());
        }

        Ok(value)
    }

    /// Ensures `value >= must_be_greater_than_or_equal_to`.
    ///
    /// # Errors
    ///
    /// [`GuardError::OutOfRange`] if the value is less than the bound.
    pub fn value_less_than<T>(value: T, must_be_greater_than_or_equal_to: T, param_name: &str) -> GuardResult<T>
    where
        T: PartialOrd + Display,
    {
        if compare(&value, &must_be_greater_than_or_equal_to) == Ordering::Less {
            return Err(GuardError::out_of_range(
                param_name,
                format!("Value must be greater than or equal to {}.", must_be_greater_than_or_equal_to),
            )
            .traced());
        }

        Ok(value)
    }

    /// Ensures `value > must_be_greater_than`.
    ///
    /// # Errors
    ///
    /// [`GuardError::OutOfRange`] if the value is less than or equal to the bound.
    pub fn value_less_than_or_equal_to<T>(value: T, must_be_greater_than: T, param_name: &str) -> GuardResult<T>
    where
        T: PartialOrd + Display,
    {
        if compare(&value, &must_be_greater_than) != Ordering::Greater {
            return Err(GuardError::out_of_range(
                param_name,
                format!("Value must be greater than {}.", must_be_greater_than),
            )
            .traced());
        }

        Ok(value)
    }
}
