//! Square sets: a 9-bit mask where each bit maps to a square.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::square::Square;

/// A set of board squares packed into the low 9 bits of a `u16`.
///
/// Iterating yields squares in ascending index order, which is the order
/// the search explores moves in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u16);

impl SquareSet {
    /// No squares.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// All nine squares.
    pub const FULL: SquareSet = SquareSet(0x1FF);

    /// Create a set from a raw mask. Bits above 8 are discarded.
    #[inline]
    pub const fn new(bits: u16) -> SquareSet {
        SquareSet(bits & 0x1FF)
    }

    /// Return the underlying mask.
    #[inline]
    pub const fn inner(self) -> u16 {
        self.0
    }

    /// Return `true` if no squares are in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if at least one square is in the set.
    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `sq` is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.index()) != 0
    }

    /// Return `true` if every square of `other` is also in `self`.
    #[inline]
    pub const fn contains_all(self, other: SquareSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Return a copy with `sq` added.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1 << sq.index()))
    }

    /// Return a copy with `sq` removed.
    #[inline]
    pub const fn without(self, sq: Square) -> SquareSet {
        SquareSet(self.0 & !(1 << sq.index()))
    }

    /// Lowest-index square in the set, if any.
    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as u8)
        }
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: SquareSet) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = SquareSet;

    /// Complement within the nine board squares.
    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0 & Self::FULL.0)
    }
}

impl Iterator for SquareSet {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.first()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSet {}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        iter.into_iter().fold(SquareSet::EMPTY, SquareSet::with)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    #[test]
    fn empty_and_full() {
        assert!(SquareSet::EMPTY.is_empty());
        assert_eq!(SquareSet::FULL.count(), 9);
        assert_eq!(!SquareSet::EMPTY, SquareSet::FULL);
        assert_eq!(!SquareSet::FULL, SquareSet::EMPTY);
    }

    #[test]
    fn new_masks_high_bits() {
        assert_eq!(SquareSet::new(0xFFFF), SquareSet::FULL);
    }

    #[test]
    fn with_without_contains() {
        let set = SquareSet::EMPTY.with(Square::new(3)).with(Square::new(7));
        assert!(set.contains(Square::new(3)));
        assert!(set.contains(Square::new(7)));
        assert!(!set.contains(Square::new(0)));
        let set = set.without(Square::new(3));
        assert!(!set.contains(Square::new(3)));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set: SquareSet = [8, 0, 4, 2].into_iter().map(Square::new).collect();
        let indices: Vec<usize> = set.map(|sq| sq.index()).collect();
        assert_eq!(indices, vec![0, 2, 4, 8]);
    }

    #[test]
    fn exact_size() {
        let set = SquareSet::new(0b1_0101_0101);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn contains_all() {
        let line = SquareSet::new(0b111);
        assert!(SquareSet::new(0b1111).contains_all(line));
        assert!(!SquareSet::new(0b101).contains_all(line));
        assert!(line.contains_all(SquareSet::EMPTY));
    }

    #[test]
    fn first() {
        assert_eq!(SquareSet::EMPTY.first(), None);
        assert_eq!(SquareSet::new(0b1_0000_0100).first(), Some(Square::new(2)));
    }
}
