//! Guard error types raised when an argument violates a precondition
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message used for every presence failure.
pub(crate) const NULL_MESSAGE: &str = "Value cannot be null.";

/// Category of a guard failure, for branching without matching on fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardErrorKind {
    /// The value had to be present but was absent
    Null,
    /// The value is present but violates a content constraint
    Argument,
    /// The value is present but ordinally outside an allowed bound or range
    OutOfRange,
}

impl fmt::Display for GuardErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GuardErrorKind::Null => "null",
            GuardErrorKind::Argument => "argument",
            GuardErrorKind::OutOfRange => "out_of_range",
        };
        f.write_str(name)
    }
}

/// A rejected argument, carrying the parameter label and the violated constraint
///
/// `Display` renders as `"{message} (Parameter '{param_name}')"`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuardError {
    /// A required value was absent
    #[error("Value cannot be null. (Parameter '{param_name}')")]
    Null {
        /// Label of the rejected argument
        param_name: String,
    },

    /// A present value violated a content constraint
    #[error("{message} (Parameter '{param_name}')")]
    Argument {
        /// Label of the rejected argument
        param_name: String,
        /// Human-readable explanation
        message: String,
    },

    /// A present value fell outside an allowed bound or range
    #[error("{message} (Parameter '{param_name}')")]
    OutOfRange {
        /// Label of the rejected argument
        param_name: String,
        /// Human-readable explanation echoing the violated bound
        message: String,
    },
}

impl GuardError {
    /// Create a presence failure
    pub fn null<P>(param_name: P) -> Self
    where
        P: Into<String>,
    {
        Self::Null {
            param_name: param_name.into(),
        }
    }

    /// Create a content failure
    pub fn argument<P, M>(param_name: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self::Argument {
            param_name: param_name.into(),
            message: message.into(),
        }
    }

    /// Create a bound or range failure
    pub fn out_of_range<P, M>(param_name: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self::OutOfRange {
            param_name: param_name.into(),
            message: message.into(),
        }
    }

    /// Which family of precondition was violated
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            GuardError::Null { .. } => GuardErrorKind::Null,
            GuardError::Argument { .. } => GuardErrorKind::Argument,
            GuardError::OutOfRange { .. } => GuardErrorKind::OutOfRange,
        }
    }

    /// Label of the argument that failed
    pub fn param_name(&self) -> &str {
        match self {
            GuardError::Null { param_name }
            | GuardError::Argument { param_name, .. }
            | GuardError::OutOfRange { param_name, .. } => param_name,
        }
    }

    /// The explanation without the parameter suffix
    pub fn message(&self) -> &str {
        match self {
            GuardError::Null { .. } => NULL_MESSAGE,
            GuardError::Argument { message, .. } | GuardError::OutOfRange { message, .. } => {
                message
            }
        }
    }

    /// Emit the rejection on the `argsentry` tracing target and hand the error back.
    pub(crate) fn traced(self) -> Self {
        tracing::trace!(
            target: "argsentry",
            param_name = %self.param_name(),
            kind = %self.kind(),
            "argument rejected: {}",
            self.message()
        );
        self
    }
}

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;
