//! Capability traits that let one guard serve many concrete types
//!
//! - [`Collection`]: anything with an element count
//! - [`Identifier`]: anything with an all-zero sentinel value
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A container whose element count is known without iterating
pub trait Collection {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Collection for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Collection for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Collection for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Collection for BinaryHeap<T> {
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<T, S> Collection for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<T> Collection for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<C: Collection + ?Sized> Collection for &mut C {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<C: Collection + ?Sized> Collection for Box<C> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

/// A unique identifier with a reserved "no meaningful value" sentinel
pub trait Identifier: PartialEq + Sized {
    /// The all-zero sentinel
    fn empty() -> Self;

    /// Whether this identifier equals the sentinel
    fn is_empty_identifier(&self) -> bool {
        *self == Self::empty()
    }
}

impl Identifier for u64 {
    fn empty() -> Self {
        0
    }
}

impl Identifier for u128 {
    fn empty() -> Self {
        0
    }
}

impl Identifier for [u8; 16] {
    fn empty() -> Self {
        [0; 16]
    }
}

#[cfg(feature = "uuid")]
impl Identifier for uuid::Uuid {
    fn empty() -> Self {
        uuid::Uuid::nil()
    }

    fn is_empty_identifier(&self) -> bool {
        self.is_nil()
    }
}

#[cfg(feature = "ulid")]
impl Identifier for ulid::Ulid {
    fn empty() -> Self {
        ulid::Ulid::nil()
    }

    fn is_empty_identifier(&self) -> bool {
        self.is_nil()
    }
}
