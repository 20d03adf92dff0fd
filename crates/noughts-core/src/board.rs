//! The board: one square set per player.

use std::fmt;

use crate::cell::Cell;
use crate::error::BoardError;
use crate::lines;
use crate::player::Player;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Complete tic-tac-toe position.
///
/// The board stores marks only. Whose turn it is belongs to the caller
/// (a game session, a search frame), though [`Board::side_to_move`]
/// infers it for boards reached by legal play.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Marks for each player, indexed by [`Player::index()`].
    marks: [SquareSet; Player::COUNT],
}

impl Board {
    /// Return an empty board.
    #[inline]
    pub const fn empty() -> Board {
        Board {
            marks: [SquareSet::EMPTY; Player::COUNT],
        }
    }

    /// Build a board from each player's marks.
    ///
    /// # Panics
    ///
    /// Panics if the two sets overlap.
    pub fn from_marks(x: SquareSet, o: SquareSet) -> Board {
        assert!((x & o).is_empty(), "a square cannot hold two marks");
        Board { marks: [x, o] }
    }

    /// Return what occupies `sq`.
    pub fn cell(&self, sq: Square) -> Cell {
        Player::ALL
            .into_iter()
            .find(|&player| self.marks[player.index()].contains(sq))
            .map_or(Cell::Empty, Cell::Mark)
    }

    /// Return the squares marked by `player`.
    #[inline]
    pub fn marks(&self, player: Player) -> SquareSet {
        self.marks[player.index()]
    }

    /// Return the squares holding any mark.
    #[inline]
    pub fn occupied(&self) -> SquareSet {
        self.marks[0] | self.marks[1]
    }

    /// Return `true` if no mark occupies `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }

    /// Return the empty squares. Iterating the set yields ascending indices.
    #[inline]
    pub fn empty_squares(&self) -> SquareSet {
        !self.occupied()
    }

    /// Return `true` if every square is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == SquareSet::FULL
    }

    /// Number of marks placed by `player`.
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.marks[player.index()].count()
    }

    /// Return `true` if `player` owns all three squares of some line.
    #[inline]
    pub fn has_winner(&self, player: Player) -> bool {
        lines::completed_line(self.marks(player)).is_some()
    }

    /// The player whose turn it is, assuming X moved first and the
    /// players alternated.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Return a copy of the board with `player`'s mark on `sq`.
    ///
    /// The square must be empty. This is not checked in release builds;
    /// callers taking untrusted input go through the engine's checked
    /// `apply_move`.
    #[inline]
    #[must_use]
    pub fn place(mut self, sq: Square, player: Player) -> Board {
        self.set(sq, player);
        self
    }

    /// Put `player`'s mark on the empty square `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, player: Player) {
        debug_assert!(self.is_empty(sq), "square {sq} is already occupied");
        self.marks[player.index()] = self.marks[player.index()].with(sq);
    }

    /// Remove whatever mark occupies `sq`.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        for side in &mut self.marks {
            *side = side.without(sq);
        }
    }

    /// Validate that the position could arise from legal play.
    pub fn validate(&self) -> Result<(), BoardError> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if o > x || x > o + 1 {
            return Err(BoardError::UnbalancedMarks { x, o });
        }

        match (self.has_winner(Player::X), self.has_winner(Player::O)) {
            (true, true) => Err(BoardError::TwoWinners),
            // X's winning move must have been the last one
            (true, false) if x != o + 1 => Err(BoardError::PlayAfterWin { winner: Player::X }),
            (false, true) if x != o => Err(BoardError::PlayAfterWin { winner: Player::O }),
            _ => Ok(()),
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as a 3×3 grid.
///
/// Empty squares show their index so a human can tell which number to
/// enter.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0u8..3 {
                let sq = Square::new(row * 3 + col);
                let c = match board.cell(sq) {
                    Cell::Empty => char::from(b'0' + sq.index() as u8),
                    Cell::Mark(player) => player.mark(),
                };
                if col < 2 {
                    write!(f, " {c} |")?;
                } else {
                    writeln!(f, " {c}")?;
                }
            }
        }
        Ok(())
    }
}
