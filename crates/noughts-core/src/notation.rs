//! Board notation: nine cell characters in row-major order.
//!
//! The compact form is `XX.OO....`. A row-separated form `XX./OO./...` is
//! also accepted. Marks are case-insensitive and `-` or `_` may stand in
//! for `.`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::NotationError;
use crate::player::Player;
use crate::square::Square;

/// Notation for the empty board.
pub const EMPTY_BOARD: &str = ".........";

fn parse_cell(c: char) -> Result<Option<Player>, NotationError> {
    match c {
        '.' | '-' | '_' => Ok(None),
        _ => Player::from_mark(c)
            .map(Some)
            .ok_or(NotationError::InvalidCellChar { character: c }),
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Board, NotationError> {
        let s = s.trim();
        let cells: Vec<char> = if s.contains('/') {
            let rows: Vec<&str> = s.split('/').collect();
            if rows.len() != 3 {
                return Err(NotationError::WrongRowCount { found: rows.len() });
            }
            for (row, text) in rows.iter().enumerate() {
                let length = text.chars().count();
                if length != 3 {
                    return Err(NotationError::BadRowLength { row, length });
                }
            }
            rows.iter().flat_map(|row| row.chars()).collect()
        } else {
            s.chars().collect()
        };

        if cells.len() != Square::COUNT {
            return Err(NotationError::WrongCellCount { found: cells.len() });
        }

        let mut board = Board::empty();
        for (sq, &c) in Square::ALL.iter().zip(cells.iter()) {
            if let Some(player) = parse_cell(c)? {
                board.set(*sq, player);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::ALL {
            write!(f, "{}", self.cell(sq))?;
        }
        Ok(())
    }
}

impl Board {
    /// Row-separated notation, e.g. `XX./OO./...`.
    pub fn to_rows(&self) -> String {
        let mut out = String::with_capacity(11);
        for sq in Square::ALL {
            if sq.index() > 0 && sq.col() == 0 {
                out.push('/');
            }
            out.push(self.cell(sq).to_char());
        }
        out
    }
}
