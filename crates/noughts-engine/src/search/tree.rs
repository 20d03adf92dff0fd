//! Exhaustive minimax without pruning.

use noughts_core::{Board, Player};

use crate::eval::{DRAW_SCORE, terminal_score};

/// Search state threaded through minimax calls.
pub(super) struct SearchContext {
    /// Total nodes visited, terminal nodes included.
    pub nodes: u64,
}

/// Return `true` if `score` should replace `best` for `player`.
///
/// O maximizes and X minimizes. Only strict improvements replace, so on
/// ties the first candidate explored (the lowest square) is kept.
#[inline]
pub(super) fn improves(player: Player, score: i32, best: Option<i32>) -> bool {
    match (best, player) {
        (None, _) => true,
        (Some(best), Player::O) => score > best,
        (Some(best), Player::X) => score < best,
    }
}

/// Minimax value of `board` with `player` to move.
///
/// Every empty square is tried in ascending order by placing the mark,
/// recursing for the opponent, then clearing it again, so `board` is
/// unchanged when this returns.
pub(super) fn minimax(board: &mut Board, player: Player, ctx: &mut SearchContext) -> i32 {
    ctx.nodes += 1;

    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mut best = None;
    for sq in board.empty_squares() {
        board.set(sq, player);
        let score = minimax(board, !player, ctx);
        board.clear(sq);

        if improves(player, score, best) {
            best = Some(score);
        }
    }

    // A non-terminal board always has an empty square
    best.unwrap_or(DRAW_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improves_respects_side_and_ties() {
        assert!(improves(Player::O, -10, None));
        assert!(improves(Player::O, 10, Some(0)));
        assert!(!improves(Player::O, 0, Some(0)));
        assert!(improves(Player::X, -10, Some(0)));
        assert!(!improves(Player::X, 10, Some(0)));
        assert!(!improves(Player::X, -10, Some(-10)));
    }

    #[test]
    fn terminal_board_is_one_node() {
        let mut board: Board = "XXXOO....".parse().unwrap();
        let mut ctx = SearchContext { nodes: 0 };
        assert_eq!(minimax(&mut board, Player::O, &mut ctx), -10);
        assert_eq!(ctx.nodes, 1);
    }

    #[test]
    fn last_square_is_forced() {
        // Only square 8 is free; X taking it completes the diagonal
        let mut board: Board = "XOXOXOOX.".parse().unwrap();
        let before = board;
        let mut ctx = SearchContext { nodes: 0 };
        assert_eq!(minimax(&mut board, Player::X, &mut ctx), -10);
        assert_eq!(ctx.nodes, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn restores_board_after_deep_search() {
        let mut board = Board::empty();
        let mut ctx = SearchContext { nodes: 0 };
        let score = minimax(&mut board, Player::X, &mut ctx);
        assert_eq!(score, 0);
        assert_eq!(board, Board::empty());
    }
}
