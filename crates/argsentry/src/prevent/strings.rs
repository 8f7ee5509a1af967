//! String guards
//!
//! White space is Unicode `White_Space`, as classified by [`char::is_whitespace`].
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use super::Prevent;
use crate::error::{GuardError, GuardResult};

fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

impl Prevent {
    /// Ensures a string, if present, contains a non-white-space character.
    ///
    /// An absent string passes.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if the string is present and empty or white space.
    pub fn empty_or_white_space_string<S>(value: Option<S>, param_name: &str) -> GuardResult<Option<S>>
    where
        S: AsRef<str>,
    {
        match value {
            Some(text) if is_blank(text.as_ref()) => {
                Err(GuardError::argument(param_name, "Value cannot be empty or white space.").traced())
            }
            other => Ok(other),
        }
    }

    /// Ensures a string is present and non-empty.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if the string is absent or empty.
    pub fn null_or_empty_string<S>(value: Option<S>, param_name: &str) -> GuardResult<S>
    where
        S: AsRef<str>,
    {
        match value {
            Some(text) if !text.as_ref().is_empty() => Ok(text),
            _ => Err(GuardError::argument(param_name, "Value cannot be null or empty.").traced()),
        }
    }

    /// Ensures a string is present and contains a non-white-space character.
    ///
    /// # Errors
    ///
    /// [`GuardError::Argument`] if the string is absent, empty, or white space.
    pub fn null_or_white_space_string<S>(value: Option<S>, param_name: &str) -> GuardResult<S>
    where
        S: AsRef<str>,
    {
        match value {
            Some(text) if !is_blank(text.as_ref()) => Ok(text),
            _ => Err(GuardError::argument(param_name, "Value cannot be null, empty, or white space.").traced()),
        }
    }
}
