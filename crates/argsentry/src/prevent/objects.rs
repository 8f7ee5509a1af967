//! Presence and type-default guards
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use super::Prevent;
use crate::error::{GuardError, GuardResult};

impl Prevent {
    /// Ensures a value is present.
    ///
    /// Any present value passes, including a type's zero value.
    ///
    /// # Errors
    ///
    /// [`GuardError::Null`] if the value is absent.
    pub fn null_object<T>(obj: Option<T>, param_name: &str) -> GuardResult<T> {
        obj.ok_or_else(|| GuardError::null(param_name).traced())
    }

    /// Ensures a value differs from its type's default.
    ///
    /// For `Option<T>` the default is `None`, so an absent value fails while
    /// `Some` of an empty value passes.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if `obj == T::default()`.
    pub fn default_value<T>(obj: T, param_name: &str) -> GuardResult<T>
    where
        T: Default + PartialEq,
    {
        if obj == T::default() {
            return Err(GuardError::argument(param_name, "Parameter cannot be default type value.").traced());
        }

        Ok(obj)
    }
}
