//! ArgSentry - guard clauses for function arguments
//!
//! This crate provides a flat set of stateless guards that check an argument
//! against a common precondition and return a descriptive error when it is
//! violated:
//! - **Presence**: `null_object`, `null_identifier`
//! - **Content**: empty or white-space strings, empty collections, type defaults,
//!   all-zero identifiers
//! - **Ordering**: single bounds, inclusive ranges, per-element collection floors
//!
//! ## Quick Start
//!
//! ```rust
//! use argsentry::{GuardErrorKind, Prevent};
//!
//! let retries = Prevent::value_greater_than(3, 5, "retries").unwrap();
//! assert_eq!(retries, 3);
//!
//! let error = Prevent::null_or_empty_string(Some(""), "name").unwrap_err();
//! assert_eq!(error.kind(), GuardErrorKind::Argument);
//! assert_eq!(error.param_name(), "name");
//! assert_eq!(error.to_string(), "Value cannot be null or empty. (Parameter 'name')");
//! ```
//!
//! ## Absent Values
//!
//! Absence is modelled with `Option`. Guards whose purpose is presence reject
//! `None`; guards that only inspect content (`empty_or_white_space_string`,
//! `empty_identifier`, `collection_with_any_values_less_than_or_equal_to`)
//! let `None` through unchanged.
//!
//! ## Features
//!
//! - `uuid` (default): identifier guards accept `uuid::Uuid`
//! - `ulid`: identifier guards accept `ulid::Ulid`
//!
//! Rejections are reported on the `argsentry` tracing target at `TRACE` level.
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

pub mod capabilities;
pub mod error;
pub mod prevent;

// Re-export commonly used types for convenience
pub use capabilities::{Collection, Identifier};
pub use error::{GuardError, GuardErrorKind, GuardResult};
pub use prevent::Prevent;
