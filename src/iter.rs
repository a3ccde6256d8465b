//! Iterator implementations for `SmallSet`.

use core::{
    borrow::Borrow,
    iter::{FromIterator, FusedIterator},
};

use crate::{
    SmallSet,
    macros::bitpos,
    set::{BYTE_BITS, DATA_SIZE},
};

/// An iterator over the members of a [`SmallSet`].
///
/// This struct is created by the [`iter`](SmallSet::iter) method on
/// [`SmallSet`]. It yields members in ascending order.
pub type Iter<'a> = BitIter<&'a [u8]>;

/// An owning iterator over the members of a [`SmallSet`].
///
/// This struct is created by the [`IntoIterator`] implementation for
/// [`SmallSet`]. Since the set is `Copy`, it simply owns the sixteen bytes.
pub type IntoIter = BitIter<[u8; DATA_SIZE]>;

/// An iterator over the indices of set bits in a packed byte slice.
///
/// The iterator is double-ended and skips whole zero bytes.
///
/// # Examples
///
/// ```
/// use setcalc::set;
///
/// let s = set![5, 10, 15];
///
/// let forward: Vec<_> = s.iter().collect();
/// assert_eq!(forward, vec![5, 10, 15]);
///
/// let backward: Vec<_> = s.iter().rev().collect();
/// assert_eq!(backward, vec![15, 10, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct BitIter<S: Borrow<[u8]>> {
    pub(crate) bytes: S,
    pub(crate) pos: usize,  // next bit to inspect (forward)
    pub(crate) rpos: usize, // one past the next bit to inspect (reverse)
}

impl<S: Borrow<[u8]>> BitIter<S> {
    pub(crate) fn new(bytes: S) -> Self {
        let rpos = bytes.borrow().len() * BYTE_BITS;
        Self { bytes, pos: 0, rpos }
    }
}

impl<S: Borrow<[u8]>> Iterator for BitIter<S> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let slice = self.bytes.borrow();

        while self.pos < self.rpos {
            let (bi, off) = bitpos!(self.pos);
            let byte = slice[bi] >> off;
            if byte == 0 {
                self.pos = (bi + 1) * BYTE_BITS;
                continue;
            }

            let result = self.pos + byte.trailing_zeros() as usize;
            if result >= self.rpos {
                self.pos = self.rpos;
                return None;
            }
            self.pos = result + 1;
            return u8::try_from(result).ok();
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<S: Borrow<[u8]>> ExactSizeIterator for BitIter<S> {
    fn len(&self) -> usize {
        let slice = self.bytes.borrow();
        (self.pos..self.rpos)
            .filter(|&i| {
                let (bi, off) = bitpos!(i);
                (slice[bi] >> off) & 1 != 0
            })
            .count()
    }
}

impl<S: Borrow<[u8]>> FusedIterator for BitIter<S> {}

impl<S: Borrow<[u8]>> DoubleEndedIterator for BitIter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slice = self.bytes.borrow();

        while self.rpos > self.pos {
            let (bi, off) = bitpos!(self.rpos - 1);
            // Only bits up to and including `off`
            let mask = if off == 7 { !0u8 } else { (1u8 << (off + 1)) - 1 };
            let byte = slice[bi] & mask;
            if byte == 0 {
                self.rpos = bi * BYTE_BITS;
                continue;
            }

            let result = bi * BYTE_BITS + (7 - byte.leading_zeros() as usize);
            if result < self.pos {
                self.rpos = self.pos;
                return None;
            }
            self.rpos = result;
            return u8::try_from(result).ok();
        }

        None
    }
}

impl<'a> IntoIterator for &'a SmallSet {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for SmallSet {
    type Item = u8;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        BitIter::new(self.data)
    }
}

impl FromIterator<u8> for SmallSet {
    /// Collects members into a set.
    ///
    /// # Panics
    ///
    /// Panics if any member is outside the universe.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

impl Extend<u8> for SmallSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for n in iter {
            self.insert(n);
        }
    }
}

impl<'a> Extend<&'a u8> for SmallSet {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
