//! Range guards
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use std::cmp::Ordering;
use std::fmt::Display;

use super::{compare, Prevent};
use crate::error::{GuardError, GuardResult};

impl Prevent {
    /// Ensures `range_start <= value <= range_end`.
    ///
    /// Both ends are inclusive. The bounds are not checked against each other,
    /// so an inverted range rejects every value.
    ///
    /// # Errors
    ///
    /// [`GuardError::OutOfRange`] if the value lies below the start or above the end.
    pub fn value_outside_of_range<T>(value: T, range_start: T, range_end: T, param_name: &str) -> GuardResult<T>
    where
        T: PartialOrd + Display,
    {
        if compare(&value, &range_start) == Ordering::Less || compare(&value, &range_end) == Ordering::Greater {
            return Err(GuardError::out_of_range(
                param_name,
                format!("Value outside of specified range; {} - {}.", range_start, range_end),
            )
            .traced());
        }

        Ok(value)
    }
}
