//! Core tic-tac-toe types: board representation, win lines, and game rules.

mod board;
mod cell;
mod error;
mod lines;
mod notation;
mod outcome;
mod perft;
mod player;
mod square;
mod square_set;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use error::{BoardError, NotationError};
pub use lines::{WIN_LINES, WIN_MASKS};
pub use notation::EMPTY_BOARD;
pub use outcome::GameOutcome;
pub use perft::{count_games, divide, perft};
pub use player::Player;
pub use square::Square;
pub use square_set::SquareSet;
