//! Search and game rules for noughts.

pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

pub use error::MoveError;
pub use eval::{evaluate, terminal_score};
pub use rules::{apply_move, reset_board};
pub use search::{Move, SearchResult, best_move, minimax, search};
pub use session::{GameSession, Mode};
