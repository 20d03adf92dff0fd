//! The contents of a single square.

use std::fmt;

use crate::player::Player;

/// What occupies a square: nothing, or one player's mark.
///
/// `Empty` is a distinct variant, so an empty line can never be mistaken
/// for a line of matching marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    /// Return the owning player, if any.
    #[inline]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }

    /// `true` if no mark occupies the cell.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Notation character: `X`, `O` or `.`.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(player) => player.mark(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        Cell::Mark(player)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
