//! Move errors reported back to the caller.

use noughts_core::Square;

/// A move the rules do not allow.
///
/// These are recoverable: a front end should report them and keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[error("square {square} is already occupied")]
    Occupied {
        /// The square that was targeted.
        square: Square,
    },

    /// The game has already been won or drawn.
    #[error("the game is over")]
    GameOver,

    /// The computer was asked to move when it is not its turn.
    #[error("it is not the computer's turn")]
    NotComputerTurn,

    /// A human tried to move while the computer's reply is due.
    #[error("waiting for the computer's move")]
    ComputerToMove,
}

#[cfg(test)]
mod tests {
    use super::MoveError;
    use noughts_core::Square;

    #[test]
    fn display() {
        let err = MoveError::Occupied {
            square: Square::new(4),
        };
        assert_eq!(err.to_string(), "square 4 is already occupied");
        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
    }
}
