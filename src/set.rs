//! `SmallSet` struct and core implementation.

use crate::{
    iter::{BitIter, Iter},
    macros::bitpos,
};

/// Number of representable members; the universe is `0..UNIVERSE_SIZE`.
pub const UNIVERSE_SIZE: usize = 128;

/// Number of members printed per row by the [`Display`](core::fmt::Display)
/// implementation.
pub const ROW_SIZE: usize = 16;

pub(crate) const BYTE_BITS: usize = 8;

/// Number of bytes backing a [`SmallSet`].
pub const DATA_SIZE: usize = UNIVERSE_SIZE / BYTE_BITS;

/// A set of integers drawn from the fixed universe `0..128`.
///
/// # Overview
///
/// `SmallSet` is a plain bit vector: bit `n` is set if and only if `n` is a
/// member. The 128 bits are packed into 16 bytes, least significant bit
/// first, so the whole set is `Copy` and never allocates.
///
/// Members are `u8` values. Queries for values outside the universe answer
/// `false`; inserting one is a programming error and panics.
///
/// # Examples
///
/// ```
/// use setcalc::SmallSet;
///
/// let mut s = SmallSet::new();
/// s.insert(3);
/// s.insert(127);
///
/// assert!(s.contains(3));
/// assert!(s.contains(127));
/// assert!(!s.contains(4));
/// assert!(!s.contains(200)); // outside the universe
/// assert_eq!(s.len(), 2);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SmallSet {
    pub(crate) data: [u8; DATA_SIZE],
}

impl SmallSet {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use setcalc::SmallSet;
    /// let s = SmallSet::new();
    /// assert!(s.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [0; DATA_SIZE],
        }
    }

    /// Returns the size of the universe members are drawn from.
    ///
    /// ```
    /// # use setcalc::SmallSet;
    /// assert_eq!(SmallSet::universe(), 128);
    /// ```
    #[must_use]
    pub const fn universe() -> usize {
        UNIVERSE_SIZE
    }

    /// Creates a set from its packed byte representation.
    ///
    /// Byte `i` holds members `8 * i ..= 8 * i + 7`, least significant bit
    /// first.
    #[must_use]
    pub const fn from_bytes(data: [u8; DATA_SIZE]) -> Self {
        Self { data }
    }

    /// Returns the packed byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DATA_SIZE] {
        &self.data
    }

    /// Returns `true` if `n` is a member.
    ///
    /// Values outside the universe are never members.
    #[must_use]
    #[inline]
    pub fn contains(&self, n: u8) -> bool {
        let n = usize::from(n);
        if n >= UNIVERSE_SIZE {
            return false;
        }
        let (idx, bp) = bitpos!(n);
        (self.data[idx] >> bp) & 1 != 0
    }

    /// Sets membership of `n` to `v` and returns the previous membership.
    ///
    /// # Panics
    ///
    /// Panics if `v` is `true` and `n` is outside the universe.
    pub fn replace(&mut self, n: u8, v: bool) -> bool {
        let i = usize::from(n);
        if i >= UNIVERSE_SIZE {
            assert!(!v, "member {n} is outside the universe 0..{UNIVERSE_SIZE}");
            return false;
        }
        let (idx, bp) = bitpos!(i);
        let byte = &mut self.data[idx];
        let was = (*byte >> bp) & 1 != 0;
        if v {
            *byte |= 1 << bp;
        } else {
            *byte &= !(1 << bp);
        }
        was
    }

    /// Adds `n` to the set.
    ///
    /// Returns `true` if `n` was not already a member.
    ///
    /// # Panics
    ///
    /// Panics if `n` is outside the universe.
    ///
    /// # Examples
    ///
    /// ```
    /// # use setcalc::SmallSet;
    /// let mut s = SmallSet::new();
    /// assert!(s.insert(42));
    /// assert!(!s.insert(42));
    /// ```
    #[inline]
    pub fn insert(&mut self, n: u8) -> bool {
        !self.replace(n, true)
    }

    /// Removes `n` from the set.
    ///
    /// Returns `true` if `n` was a member.
    #[inline]
    pub fn remove(&mut self, n: u8) -> bool {
        self.replace(n, false)
    }

    /// Removes every member.
    #[inline]
    pub fn clear(&mut self) {
        self.data = [0; DATA_SIZE];
    }

    /// Replaces the contents of the set with `members`.
    ///
    /// The set is cleared first, then each member is inserted in the order
    /// given. Repeated members are harmless.
    ///
    /// # Panics
    ///
    /// Panics if any member is outside the universe.
    ///
    /// # Examples
    ///
    /// ```
    /// # use setcalc::SmallSet;
    /// let mut s = SmallSet::new();
    /// s.insert(100);
    ///
    /// s.load_from([9, 3, 5, 3]);
    /// assert_eq!(s.iter().collect::<Vec<_>>(), vec![3, 5, 9]);
    /// ```
    pub fn load_from(&mut self, members: impl IntoIterator<Item = u8>) {
        self.clear();
        for n in members {
            self.insert(n);
        }
    }

    /// Returns an iterator over the members in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        BitIter::new(&self.data[..])
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Returns the smallest member, if any.
    #[must_use]
    pub fn first(&self) -> Option<u8> {
        self.iter().next()
    }

    /// Returns the largest member, if any.
    #[must_use]
    pub fn last(&self) -> Option<u8> {
        self.iter().next_back()
    }
}
