//! Game-tree counting, used to verify move generation and terminal detection.

use tracing::debug;

use crate::board::Board;
use crate::square::Square;

/// Count move sequences of exactly `depth` plies from `board`.
///
/// Play stops at terminal positions, so a line that ends early contributes
/// nothing at greater depths. The side to move is inferred from the marks.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_terminal() {
        return 0;
    }

    let player = board.side_to_move();
    let moves = board.empty_squares();

    if depth == 1 {
        return moves.count() as u64;
    }

    moves
        .map(|sq| perft(&board.place(sq, player), depth - 1))
        .sum()
}

/// Count every complete game reachable from `board`.
pub fn count_games(board: &Board) -> u64 {
    if board.is_terminal() {
        return 1;
    }
    let player = board.side_to_move();
    board
        .empty_squares()
        .map(|sq| count_games(&board.place(sq, player)))
        .sum()
}

/// Run perft with a per-square breakdown (useful for debugging).
///
/// Returns `(square, node_count)` pairs in ascending square order.
pub fn divide(board: &Board, depth: usize) -> Vec<(Square, u64)> {
    if board.is_terminal() {
        return Vec::new();
    }
    let player = board.side_to_move();
    board
        .empty_squares()
        .map(|sq| {
            let child = board.place(sq, player);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            debug!(%sq, count, "divide");
            (sq, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn perft_empty_depth_1() {
        assert_eq!(perft(&Board::empty(), 1), 9);
    }

    #[test]
    fn perft_empty_depth_2() {
        assert_eq!(perft(&Board::empty(), 2), 72);
    }

    #[test]
    fn perft_empty_depth_3() {
        assert_eq!(perft(&Board::empty(), 3), 504);
    }

    #[test]
    fn perft_empty_depth_5() {
        // No game can end before the fifth ply
        assert_eq!(perft(&Board::empty(), 5), 15_120);
    }

    #[test]
    fn perft_empty_depth_6() {
        // 1 440 games end on ply 5 and drop out
        assert_eq!(perft(&Board::empty(), 6), 54_720);
    }

    #[test]
    fn perft_terminal_is_zero() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(perft(&board, 1), 0);
        assert_eq!(perft(&board, 0), 1);
    }

    #[test]
    fn count_all_games() {
        assert_eq!(count_games(&Board::empty()), 255_168);
    }

    #[test]
    fn count_games_from_terminal() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(count_games(&board), 1);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board: Board = "X...O....".parse().unwrap();
        let parts = divide(&board, 3);
        assert_eq!(parts.len(), 7);
        assert_eq!(parts[0].0.index(), 1);
        let total: u64 = parts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, 3));
    }
}
