//! Trait implementations for `SmallSet`.

use core::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign},
};

use crate::{
    SmallSet,
    set::{DATA_SIZE, ROW_SIZE},
};

impl From<[u8; DATA_SIZE]> for SmallSet {
    fn from(data: [u8; DATA_SIZE]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<SmallSet> for [u8; DATA_SIZE] {
    fn from(s: SmallSet) -> Self {
        s.data
    }
}

impl AsRef<[u8]> for SmallSet {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for SmallSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SmallSet {
    /// Formats the members in ascending order, sixteen per row.
    ///
    /// Members within a row are separated by `", "` and rows by a newline.
    /// There is no trailing newline; an empty set formats as the empty
    /// string.
    ///
    /// # Examples
    ///
    /// ```
    /// use setcalc::set;
    ///
    /// assert_eq!(set![9, 3, 5].to_string(), "3, 5, 9");
    ///
    /// let wide: setcalc::SmallSet = (0..18).collect();
    /// assert_eq!(
    ///     wide.to_string(),
    ///     "0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15\n16, 17"
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(if i % ROW_SIZE == 0 { "\n" } else { ", " })?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl BitOr for SmallSet {
    type Output = Self;

    /// Returns the union of two sets.
    ///
    /// ```
    /// use setcalc::set;
    /// assert_eq!(set![1, 2] | set![2, 3], set![1, 2, 3]);
    /// ```
    fn bitor(self, rhs: Self) -> Self {
        self.union(&rhs)
    }
}

impl BitOrAssign for SmallSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.union_with(&rhs);
    }
}

impl BitAnd for SmallSet {
    type Output = Self;

    /// Returns the intersection of two sets.
    ///
    /// ```
    /// use setcalc::set;
    /// assert_eq!(set![1, 2] & set![2, 3], set![2]);
    /// ```
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(&rhs)
    }
}

impl BitAndAssign for SmallSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.intersection_with(&rhs);
    }
}

impl Sub for SmallSet {
    type Output = Self;

    /// Returns the members of `self` that are not in `rhs`.
    ///
    /// ```
    /// use setcalc::set;
    /// assert_eq!(set![1, 2] - set![2, 3], set![1]);
    /// ```
    fn sub(self, rhs: Self) -> Self {
        self.difference(&rhs)
    }
}

impl SubAssign for SmallSet {
    fn sub_assign(&mut self, rhs: Self) {
        self.difference_with(&rhs);
    }
}

impl BitXor for SmallSet {
    type Output = Self;

    /// Returns the symmetric difference of two sets.
    ///
    /// ```
    /// use setcalc::set;
    /// assert_eq!(set![1, 2] ^ set![2, 3], set![1, 3]);
    /// ```
    fn bitxor(self, rhs: Self) -> Self {
        self.symmetric_difference(&rhs)
    }
}

impl BitXorAssign for SmallSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.symmetric_difference_with(&rhs);
    }
}
