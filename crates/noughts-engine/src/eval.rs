//! Terminal evaluation.
//!
//! Scores are from O's point of view: O is the maximizer, X the
//! minimizer. Scores are not discounted by depth, so a win in one ply
//! and a win in five plies are worth the same.

use noughts_core::{Board, GameOutcome, Player};

/// Score of a position O has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a position X has won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Compute the outcome of `board`.
///
/// Priority is X win, then O win, then draw, so every board maps to
/// exactly one outcome.
#[inline]
pub fn evaluate(board: &Board) -> GameOutcome {
    board.outcome()
}

/// Score a terminal board, or return `None` if play continues.
///
/// Checks run in the same order as [`evaluate`]: X win (−10), O win (+10),
/// full board (0).
#[inline]
pub fn terminal_score(board: &Board) -> Option<i32> {
    if board.has_winner(Player::X) {
        Some(LOSS_SCORE)
    } else if board.has_winner(Player::O) {
        Some(WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn in_progress_has_no_score() {
        assert_eq!(terminal_score(&Board::empty()), None);
        assert_eq!(terminal_score(&board("XX.OO....")), None);
    }

    #[test]
    fn wins_and_draw() {
        assert_eq!(terminal_score(&board("XXXOO....")), Some(-10));
        assert_eq!(terminal_score(&board("XX.OOOX..")), Some(10));
        assert_eq!(terminal_score(&board("XOXXOOOXX")), Some(0));
    }

    #[test]
    fn x_win_takes_priority() {
        let both = board("XXXOOO...");
        assert_eq!(terminal_score(&both), Some(LOSS_SCORE));
        assert_eq!(evaluate(&both), GameOutcome::Win(Player::X));
    }

    #[test]
    fn evaluate_is_idempotent() {
        let b = board("XO.XO....");
        let first = evaluate(&b);
        assert_eq!(first, evaluate(&b));
        assert_eq!(first, GameOutcome::InProgress);
    }

    #[test]
    fn score_agrees_with_outcome() {
        for text in ["XXXOO....", "XX.OOOX..", "XOXXOOOXX", "X........"] {
            let b = board(text);
            let expected = match evaluate(&b) {
                GameOutcome::Win(Player::X) => Some(LOSS_SCORE),
                GameOutcome::Win(Player::O) => Some(WIN_SCORE),
                GameOutcome::Draw => Some(DRAW_SCORE),
                GameOutcome::InProgress => None,
            };
            assert_eq!(terminal_score(&b), expected, "{text}");
        }
    }
}
