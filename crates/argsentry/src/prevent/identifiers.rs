//! Identifier guards
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use super::Prevent;
use crate::capabilities::Identifier;
use crate::error::{GuardError, GuardResult, NULL_MESSAGE};

impl Prevent {
    /// Ensures an identifier is present. The sentinel value passes.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if the identifier is absent.
    pub fn null_identifier<I>(value: Option<I>, param_name: &str) -> GuardResult<I>
    where
        I: Identifier,
    {
        value.ok_or_else(|| GuardError::argument(param_name, NULL_MESSAGE).traced())
    }

    /// Ensures an identifier, if present, is not the all-zero sentinel.
    ///
    /// An absent identifier passes.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if the identifier equals the sentinel.
    pub fn empty_identifier<I>(value: Option<I>, param_name: &str) -> GuardResult<Option<I>>
    where
        I: Identifier,
    {
        match value {
            Some(id) if id.is_empty_identifier() => {
                Err(GuardError::argument(param_name, "Value cannot be empty.").traced())
            }
            other => Ok(other),
        }
    }

    /// Ensures an identifier is present and not the all-zero sentinel.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if the identifier is absent or equals the sentinel.
    pub fn null_or_empty_identifier<I>(value: Option<I>, param_name: &str) -> GuardResult<I>
    where
        I: Identifier,
    {
        match value {
            Some(id) if !id.is_empty_identifier() => Ok(id),
            _ => Err(GuardError::argument(param_name, "Value cannot be null or empty.").traced()),
        }
    }
}
