//! Error types for board notation parsing and board validation.

use crate::player::Player;

/// Errors that occur when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The compact form does not describe exactly 9 cells.
    #[error("expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
    /// The row-separated form does not have exactly 3 rows.
    #[error("expected 3 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 3 cells.
    #[error("row {row} describes {length} cells, expected 3")]
    BadRowLength {
        /// Zero-based row index (0 = top).
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared where a cell was expected.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Mark counts cannot arise from alternating play with X first.
    #[error("unbalanced marks: {x} X against {o} O")]
    UnbalancedMarks {
        /// Number of X marks.
        x: u32,
        /// Number of O marks.
        o: u32,
    },
    /// Both players own a completed line.
    #[error("both players have three in a row")]
    TwoWinners,
    /// Play continued after a line was completed.
    #[error("{winner} won but play continued")]
    PlayAfterWin {
        /// The player who completed a line first.
        winner: Player,
    },
}
