//! Game outcome, derived from the board on demand.

use std::fmt;

use crate::board::Board;
use crate::player::Player;

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Neither player has a line and empty squares remain.
    InProgress,
    /// The given player completed a line.
    Win(Player),
    /// The board is full with no line completed.
    Draw,
}

impl GameOutcome {
    /// `true` for wins and draws.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// The winning player, if any.
    #[inline]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

impl Board {
    /// Compute the outcome of this position.
    ///
    /// Checked in the order X win, O win, full board. A malformed board
    /// where both players own a line therefore reports `Win(X)`.
    pub fn outcome(&self) -> GameOutcome {
        if self.has_winner(Player::X) {
            GameOutcome::Win(Player::X)
        } else if self.has_winner(Player::O) {
            GameOutcome::Win(Player::O)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// `true` if the game is over on this board.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }
}
