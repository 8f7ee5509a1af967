//! Collection guards
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use std::cmp::Ordering;
use std::fmt::Display;

use super::{compare, Prevent};
use crate::capabilities::Collection;
use crate::error::{GuardError, GuardResult};

const NULL_OR_EMPTY_COLLECTION: &str = "Collection cannot be null or empty.";

impl Prevent {
    /// Ensures every element of a collection is greater than `must_be_greater_than`.
    ///
    /// Elements are visited in the collection's iteration order and the first
    /// element at or below the floor fails the check. An absent collection passes.
    ///
    /// # Errors
    ///
    /// [`GuardError::OutOfRange`] if any element is less than or equal to the floor.
    pub fn collection_with_any_values_less_than_or_equal_to<'a, C, T>(
        collection: Option<&'a C>,
        must_be_greater_than: T,
        param_name: &str,
    ) -> GuardResult<Option<&'a C>>
    where
        C: ?Sized,
        &'a C: IntoIterator<Item = &'a T>,
        T: PartialOrd + Display + 'a,
    {
        if let Some(items) = collection {
            if items.into_iter().any(|item| compare(item, &must_be_greater_than) != Ordering::Greater) {
                return Err(GuardError::out_of_range(
                    param_name,
                    format!("All collection values must be greater than {}.", must_be_greater_than),
                )
                .traced());
            }
        }

        Ok(collection)
    }

    /// Ensures a collection is present and holds at least one element.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if the collection is absent or empty.
    pub fn null_or_empty_collection<C>(collection: Option<C>, param_name: &str) -> GuardResult<C>
    where
        C: Collection,
    {
        match collection {
            Some(collection) if !collection.is_empty() => Ok(collection),
            _ => Err(GuardError::argument(param_name, NULL_OR_EMPTY_COLLECTION).traced()),
        }
    }

    /// Ensures a read-only slice is present and holds at least one element.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if the slice is absent or empty.
    pub fn null_or_empty_read_only_collection<'a, T>(
        collection: Option<&'a [T]>,
        param_name: &str,
    ) -> GuardResult<&'a [T]> {
        match collection {
            Some(items) if !items.is_empty() => Ok(items),
            _ => Err(GuardError::argument(param_name, NULL_OR_EMPTY_COLLECTION).traced()),
        }
    }
}
