//! Game-tree search.

mod tree;

use std::fmt;

use noughts_core::{Board, Player, Square};
use tracing::debug;

use tree::{SearchContext, improves};

/// A square paired with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Where to play.
    pub square: Square,
    /// Minimax value after playing there, from O's point of view.
    pub score: i32,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score {})", self.square, self.score)
    }
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Selected move, or `None` when the board was already terminal.
    pub best: Option<Move>,
    /// Every root move with its score, in ascending square order.
    pub candidates: Vec<Move>,
    /// Total nodes visited, the root included.
    pub nodes: u64,
}

/// Search every line from `board` with `player` to move.
///
/// The caller's board is never modified: the search works on its own
/// copy and undoes each trial placement before trying the next.
pub fn search(board: &Board, player: Player) -> SearchResult {
    let mut ctx = SearchContext { nodes: 1 };

    if board.is_terminal() {
        return SearchResult {
            best: None,
            candidates: Vec::new(),
            nodes: ctx.nodes,
        };
    }

    let mut working = *board;
    let mut candidates = Vec::with_capacity(working.empty_squares().len());
    for square in working.empty_squares() {
        working.set(square, player);
        let score = tree::minimax(&mut working, !player, &mut ctx);
        working.clear(square);
        candidates.push(Move { square, score });
    }
    debug_assert_eq!(&working, board, "search must restore the board");

    let mut best: Option<Move> = None;
    for mv in &candidates {
        if improves(player, mv.score, best.map(|b| b.score)) {
            best = Some(*mv);
        }
    }

    debug!(
        board = %board,
        %player,
        nodes = ctx.nodes,
        best = ?best,
        "search complete"
    );

    SearchResult {
        best,
        candidates,
        nodes: ctx.nodes,
    }
}

/// Optimal move for `player_to_move`, or `None` on a terminal board.
///
/// Ties are broken in favour of the lowest square.
pub fn minimax(board: &Board, player_to_move: Player) -> Option<Move> {
    search(board, player_to_move).best
}

/// The computer's move: minimax with O to move.
pub fn best_move(board: &Board) -> Option<Move> {
    minimax(board, Player::O)
}
