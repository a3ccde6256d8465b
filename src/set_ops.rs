//! Implementations of set operations for `SmallSet`.

use core::fmt;

use crate::SmallSet;

/// The binary set operations a command can apply.
///
/// Each operation combines two operand sets byte by byte and yields a fresh
/// set, so the destination of a command may be one of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOp {
    /// Members of either operand.
    Union,
    /// Members of both operands.
    Intersect,
    /// Members of the first operand that are not in the second.
    Sub,
    /// Members of exactly one operand.
    SymDiff,
}

impl SetOp {
    /// All operations, in keyword order.
    pub const ALL: [Self; 4] = [Self::Union, Self::Intersect, Self::Sub, Self::SymDiff];

    /// Combines one byte of each operand.
    #[inline]
    const fn combine(self, a: u8, b: u8) -> u8 {
        match self {
            Self::Union => a | b,
            Self::Intersect => a & b,
            Self::Sub => a & !b,
            Self::SymDiff => a ^ b,
        }
    }

    /// Evaluates the membership predicate of this operation.
    #[must_use]
    pub const fn holds(self, in_a: bool, in_b: bool) -> bool {
        match self {
            Self::Union => in_a || in_b,
            Self::Intersect => in_a && in_b,
            Self::Sub => in_a && !in_b,
            Self::SymDiff => in_a != in_b,
        }
    }

    /// Computes `a <op> b` as a new set.
    ///
    /// # Examples
    ///
    /// ```
    /// use setcalc::{SetOp, set};
    ///
    /// let a = set![1, 2];
    /// let b = set![2, 3];
    /// assert_eq!(SetOp::Union.apply(&a, &b), set![1, 2, 3]);
    /// assert_eq!(SetOp::Sub.apply(&a, &b), set![1]);
    /// ```
    #[must_use]
    pub fn apply(self, a: &SmallSet, b: &SmallSet) -> SmallSet {
        let mut result = *a;
        result.combine_with(b, self);
        result
    }

    /// Human-readable name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersect => "intersection",
            Self::Sub => "difference",
            Self::SymDiff => "symmetric difference",
        }
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SmallSet {
    fn combine_with(&mut self, other: &Self, op: SetOp) {
        for (dst, &src) in self.data.iter_mut().zip(&other.data) {
            *dst = op.combine(*dst, src);
        }
    }

    /// Adds every member of `other` to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use setcalc::SmallSet;
    /// let mut a = SmallSet::new();
    /// let mut b = SmallSet::new();
    ///
    /// a.insert(10);
    /// b.insert(20);
    ///
    /// a.union_with(&b);
    /// assert!(a.contains(10));
    /// assert!(a.contains(20));
    /// ```
    pub fn union_with(&mut self, other: &Self) {
        self.combine_with(other, SetOp::Union);
    }

    /// Creates a new set that is the union of this set and another set.
    ///
    /// The union contains elements present in either this set or the other
    /// set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        SetOp::Union.apply(self, other)
    }

    /// Keeps only the members that are also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use setcalc::SmallSet;
    /// let mut a = SmallSet::new();
    /// let mut b = SmallSet::new();
    ///
    /// a.insert(10);
    /// a.insert(20);
    /// b.insert(10);
    ///
    /// a.intersection_with(&b);
    /// assert!(a.contains(10));
    /// assert!(!a.contains(20));
    /// ```
    pub fn intersection_with(&mut self, other: &Self) {
        self.combine_with(other, SetOp::Intersect);
    }

    /// Creates a new set that is the intersection of this set and another
    /// set.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        SetOp::Intersect.apply(self, other)
    }

    /// Removes every member of `other` from `self`.
    pub fn difference_with(&mut self, other: &Self) {
        self.combine_with(other, SetOp::Sub);
    }

    /// Creates a new set with the members of this set that are not in the
    /// other set.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        SetOp::Sub.apply(self, other)
    }

    /// Updates this set to be the symmetric difference of itself and
    /// another set.
    pub fn symmetric_difference_with(&mut self, other: &Self) {
        self.combine_with(other, SetOp::SymDiff);
    }

    /// Creates a new set that is the symmetric difference of this set and
    /// another set.
    ///
    /// The symmetric difference contains elements present in either this
    /// set or the other set, but not in both.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        SetOp::SymDiff.apply(self, other)
    }

    /// Checks if every member of this set is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| a & !b == 0)
    }

    /// Checks if every member of `other` is in this set.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Checks if the two sets have no member in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| a & b == 0)
    }
}
