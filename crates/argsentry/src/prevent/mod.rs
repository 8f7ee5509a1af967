//! The `Prevent` facade: one guard function per precondition
//!
//! Guards are grouped by family:
//!
//! - **Collections**: presence, emptiness, and per-element floors
//! - **Objects**: presence and type-default checks
//! - **Strings**: emptiness and white space
//! - **Comparisons**: single upper or lower bounds
//! - **Ranges**: inclusive two-sided bounds
//! - **Identifiers**: presence and the all-zero sentinel
//!
//! Every guard returns the checked value unchanged on success, so it can be
//! used inline at the assignment site.
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

mod collections;
mod comparisons;
mod identifiers;
mod objects;
mod ranges;
mod strings;

use std::cmp::Ordering;

/// Guard clauses for function arguments
///
/// # Examples
///
/// ```rust
/// use argsentry::{GuardResult, Prevent};
///
/// struct Account {
///     owner: String,
///     limit: u32,
/// }
///
/// fn open(owner: Option<String>, limit: u32) -> GuardResult<Account> {
///     Ok(Account {
///         owner: Prevent::null_or_white_space_string(owner, "owner")?,
///         limit: Prevent::value_outside_of_range(limit, 1, 10_000, "limit")?,
///     })
/// }
///
/// assert!(open(Some("ada".to_string()), 500).is_ok());
///
/// let error = open(Some("ada".to_string()), 0).err().unwrap();
/// assert_eq!(error.param_name(), "limit");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prevent;

/// Three-way comparison that totals a partial order.
///
/// A value unordered with itself (NaN) sorts below every ordered value and
/// equal to another such value. Two ordered values that are mutually
/// incomparable are treated as equal.
pub(crate) fn compare<T: PartialOrd + ?Sized>(left: &T, right: &T) -> Ordering {
    if let Some(ordering) = left.partial_cmp(right) {
        return ordering;
    }

    let left_unordered = left.partial_cmp(left).is_none();
    let right_unordered = right.partial_cmp(right).is_none();
    match (left_unordered, right_unordered) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
