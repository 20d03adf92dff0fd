//! Board squares, indexed 0..9 in row-major order.

use std::fmt;

use crate::square_set::SquareSet;

/// A square on the 3×3 board.
///
/// Index = row * 3 + column, so the top row is 0, 1, 2 and the
/// bottom-right corner is 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 9;

    /// All squares in ascending index order.
    pub const ALL: [Square; 9] = [
        Square(0),
        Square(1),
        Square(2),
        Square(3),
        Square(4),
        Square(5),
        Square(6),
        Square(7),
        Square(8),
    ];

    /// The centre square.
    pub const CENTER: Square = Square(4);

    /// Create a square from an index.
    ///
    /// # Panics
    ///
    /// Panics if `index > 8`. An out-of-range index is a caller bug; use
    /// [`Square::from_index`] for untrusted input.
    #[inline]
    pub const fn new(index: u8) -> Square {
        assert!(index < 9, "square index out of range 0..=8");
        Square(index)
    }

    /// Create a square from an index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 9 { Some(Square(index)) } else { None }
    }

    /// Create a square from a row and column, each in 0..3.
    pub const fn from_coords(row: u8, col: u8) -> Option<Square> {
        if row < 3 && col < 3 {
            Some(Square(row * 3 + col))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..=8).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this square (0 = top).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    /// Column of this square (0 = left).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// Return a set containing only this square.
    #[inline]
    pub const fn set(self) -> SquareSet {
        SquareSet::new(1u16 << self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn from_index_bounds() {
        assert_eq!(Square::from_index(0), Some(Square::new(0)));
        assert_eq!(Square::from_index(8), Some(Square::new(8)));
        assert_eq!(Square::from_index(9), None);
    }

    #[test]
    #[should_panic(expected = "square index out of range")]
    fn new_out_of_range_panics() {
        let _ = Square::new(9);
    }

    #[test]
    fn coords_roundtrip() {
        for sq in Square::ALL {
            assert_eq!(Square::from_coords(sq.row(), sq.col()), Some(sq));
        }
        assert_eq!(Square::from_coords(3, 0), None);
    }

    #[test]
    fn all_is_ascending() {
        for (i, sq) in Square::ALL.iter().enumerate() {
            assert_eq!(sq.index(), i);
        }
    }

    #[test]
    fn center() {
        assert_eq!(Square::CENTER, Square::from_coords(1, 1).unwrap());
        assert_eq!(Square::CENTER.index(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Square::new(5)), "5");
        assert_eq!(format!("{:?}", Square::new(5)), "Square(5)");
    }
}
