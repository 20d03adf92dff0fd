//! Caller-owned game state: board, turn, mode and whether play has ended.

use std::fmt;

use noughts_core::{Board, GameOutcome, Player, Square};
use tracing::info;

use crate::error::MoveError;
use crate::eval::evaluate;
use crate::rules::{apply_move, reset_board};
use crate::search::{Move, best_move, minimax};

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Two humans share the board.
    TwoPlayer,
    /// A human plays X against the computer playing O.
    #[default]
    VsComputer,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::TwoPlayer => write!(f, "two players"),
            Mode::VsComputer => write!(f, "vs computer"),
        }
    }
}

/// One game in progress.
///
/// The session is a plain value owned by its front end; nothing in the
/// engine keeps a reference to it between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current: Player,
    mode: Mode,
    over: bool,
}

impl GameSession {
    /// Start a new game with X to move.
    pub fn new(mode: Mode) -> Self {
        Self {
            board: reset_board(),
            current: Player::X,
            mode,
            over: false,
        }
    }

    /// Clear the board and hand the first move back to X, keeping the mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
        info!(mode = %self.mode, "new game");
    }

    /// Switch mode and start over.
    pub fn restart(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[inline]
    pub fn current(&self) -> Player {
        self.current
    }

    /// The game mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `true` once the game has been won or drawn.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Outcome of the current board, recomputed on every call.
    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    /// `true` when the computer owes a reply.
    pub fn awaiting_computer(&self) -> bool {
        self.mode == Mode::VsComputer && self.current == Player::O && !self.over
    }

    /// Play a human move for the current player.
    ///
    /// In [`Mode::VsComputer`] humans only play X; moving while the
    /// computer's reply is due fails with [`MoveError::ComputerToMove`].
    pub fn play(&mut self, square: Square) -> Result<GameOutcome, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        if self.awaiting_computer() {
            return Err(MoveError::ComputerToMove);
        }
        self.commit(square)
    }

    /// Search for and play the computer's move.
    pub fn play_computer(&mut self) -> Result<Move, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        if !self.awaiting_computer() {
            return Err(MoveError::NotComputerTurn);
        }
        let mv = best_move(&self.board).ok_or(MoveError::GameOver)?;
        self.commit(mv.square)?;
        Ok(mv)
    }

    /// The minimax move for whoever is to move, without playing it.
    pub fn hint(&self) -> Option<Move> {
        if self.over {
            return None;
        }
        minimax(&self.board, self.current)
    }

    fn commit(&mut self, square: Square) -> Result<GameOutcome, MoveError> {
        self.board = apply_move(&self.board, square, self.current)?;
        let outcome = evaluate(&self.board);
        info!(player = %self.current, %square, %outcome, "move played");

        if outcome.is_terminal() {
            self.over = true;
        } else {
            self.current = !self.current;
        }
        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
