//! Ownership categories for elements travelling through a pipe.
//!
//! The category is part of the item type: a pipe over a borrowed container
//! yields `&'a T`, a mutable borrow yields `&'a mut T`, an owning source
//! yields `T`. The lifetime `'a` ties reference elements to the container
//! borrow, so they cannot outlive it. Sources additionally carry a
//! zero-sized [`Mode`] marker so the category can be inspected at runtime.

use std::fmt;

/// How an element relates to the container it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The consumer holds the value; nothing aliases the source.
    Owned,
    /// Aliases the source; may be mutated in place.
    Mutable,
    /// Aliases the source read-only.
    Immutable,
}

impl Ownership {
    pub fn is_reference(self) -> bool {
        !matches!(self, Ownership::Owned)
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ownership::Owned => "owned",
            Ownership::Mutable => "mutable-ref",
            Ownership::Immutable => "immutable-ref",
        };
        f.write_str(s)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Source mode marker. Sealed: the three modes are the whole set.
pub trait Mode: sealed::Sealed {
    const OWNERSHIP: Ownership;
}

/// Elements are moved out of the container.
#[derive(Debug, Clone, Copy, Default)]
pub struct Owned;

/// Elements are immutable references into the container.
#[derive(Debug, Clone, Copy, Default)]
pub struct Borrowed;

/// Elements are mutable references into the container.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorrowedMut;

impl sealed::Sealed for Owned {}
impl sealed::Sealed for Borrowed {}
impl sealed::Sealed for BorrowedMut {}

impl Mode for Owned {
    const OWNERSHIP: Ownership = Ownership::Owned;
}

impl Mode for Borrowed {
    const OWNERSHIP: Ownership = Ownership::Immutable;
}

impl Mode for BorrowedMut {
    const OWNERSHIP: Ownership = Ownership::Mutable;
}

/// A reference-category element that can be copied out explicitly.
///
/// Implemented for `&T` and `&mut T`, so `cloned()`/`copied()` work on
/// both borrow modes.
pub trait RefElement {
    type Target;
    const OWNERSHIP: Ownership;

    fn to_owned_item(&self) -> Self::Target;
}

impl<T: Clone> RefElement for &T {
    type Target = T;
    const OWNERSHIP: Ownership = Ownership::Immutable;

    fn to_owned_item(&self) -> T {
        (**self).clone()
    }
}

impl<T: Clone> RefElement for &mut T {
    type Target = T;
    const OWNERSHIP: Ownership = Ownership::Mutable;

    fn to_owned_item(&self) -> T {
        (**self).clone()
    }
}
