//! Checked move application.

use noughts_core::{Board, Player, Square};

use crate::error::MoveError;

/// Return a fresh, empty board.
#[inline]
pub fn reset_board() -> Board {
    Board::empty()
}

/// Place `player`'s mark on `square`, enforcing the rules.
///
/// Fails if the game is already over or the square is occupied. The
/// input board is left as it was either way.
pub fn apply_move(board: &Board, square: Square, player: Player) -> Result<Board, MoveError> {
    if board.is_terminal() {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(square) {
        return Err(MoveError::Occupied { square });
    }
    Ok(board.place(square, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_empty() {
        let board = reset_board();
        assert!(!board.is_full());
        let squares: Vec<usize> = board.empty_squares().map(|s| s.index()).collect();
        assert_eq!(squares, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn apply_fills_square() {
        let board = reset_board();
        let next = apply_move(&board, Square::new(4), Player::X).unwrap();
        assert!(!next.is_empty(Square::new(4)));
        assert!(board.is_empty(Square::new(4)));
    }

    #[test]
    fn apply_rejects_occupied() {
        let board = reset_board().place(Square::new(4), Player::X);
        assert_eq!(
            apply_move(&board, Square::new(4), Player::O),
            Err(MoveError::Occupied {
                square: Square::new(4)
            })
        );
    }

    #[test]
    fn apply_rejects_after_game_over() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(
            apply_move(&board, Square::new(8), Player::O),
            Err(MoveError::GameOver)
        );
    }
}
