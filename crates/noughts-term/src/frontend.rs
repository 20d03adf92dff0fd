//! Event-driven terminal front end.
//!
//! Input lines arrive from a reader thread over a channel. After a human
//! move in computer mode the reply is scheduled on a timer thread; the
//! engine itself is only ever called from the loop thread.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use noughts_core::GameOutcome;
use noughts_engine::{GameSession, Mode};

use crate::command::{Command, parse_command};
use crate::error::TermError;

/// Settings adjustable while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Pause before the computer answers a human move.
    pub reply_delay: Duration,
    /// Mode of the first game.
    pub mode: Mode,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(500),
            mode: Mode::VsComputer,
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Fire a computer reply for the given game generation after the delay.
    ScheduleReply(u64),
    /// Stop the loop.
    Quit,
}

/// Events processed by the main loop.
enum FrontendEvent {
    Input(Result<Command, TermError>),
    ComputerReady(u64),
    InputClosed,
}

/// The terminal front end, owning the game session and its output.
pub struct Frontend<W: Write> {
    session: GameSession,
    config: FrontendConfig,
    /// Bumped on every new game so stale timer events are ignored.
    generation: u64,
    out: W,
}

impl Frontend<io::Stdout> {
    /// Create a front end printing to stdout.
    pub fn new(config: FrontendConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }
}

impl<W: Write> Frontend<W> {
    /// Create a front end writing to `out`.
    pub fn with_writer(config: FrontendConfig, out: W) -> Self {
        Self {
            session: GameSession::new(config.mode),
            config,
            generation: 0,
            out,
        }
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The current settings.
    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Consume the front end, returning its writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Run the event loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), TermError> {
        let (tx, rx) = mpsc::channel::<FrontendEvent>();

        let stdin_tx = tx.clone();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                debug!(cmd = %trimmed, "received command");
                if stdin_tx
                    .send(FrontendEvent::Input(parse_command(trimmed)))
                    .is_err()
                {
                    return;
                }
            }
            let _ = stdin_tx.send(FrontendEvent::InputClosed);
        });

        self.greet()?;

        for event in &rx {
            let flow = match event {
                FrontendEvent::Input(Ok(cmd)) => self.handle_command(cmd)?,
                FrontendEvent::Input(Err(e)) => {
                    warn!(error = %e, "parse error");
                    writeln!(self.out, "{e}")?;
                    Flow::Continue
                }
                FrontendEvent::ComputerReady(generation) => {
                    self.handle_computer_ready(generation)?;
                    Flow::Continue
                }
                FrontendEvent::InputClosed => Flow::Quit,
            };

            match flow {
                Flow::Continue => {}
                Flow::ScheduleReply(generation) => self.schedule_reply(generation, &tx)?,
                Flow::Quit => break,
            }
        }

        info!("noughts shutting down");
        Ok(())
    }

    /// Print the banner and the opening board.
    pub fn greet(&mut self) -> Result<(), TermError> {
        writeln!(self.out, "noughts: tic-tac-toe. Type 'help' for commands.")?;
        writeln!(self.out, "New game ({}).", self.session.mode())?;
        self.show()
    }

    /// Apply one command.
    pub fn handle_command(&mut self, cmd: Command) -> Result<Flow, TermError> {
        match cmd {
            Command::NewGame(mode) => {
                match mode {
                    Some(mode) => self.session.restart(mode),
                    None => self.session.reset(),
                }
                self.generation += 1;
                writeln!(self.out, "New game ({}).", self.session.mode())?;
                self.show()?;
            }
            Command::Play(square) => {
                if let Err(e) = self.session.play(square) {
                    writeln!(self.out, "Illegal move: {e}")?;
                    return Ok(Flow::Continue);
                }
                self.show()?;
                if self.session.awaiting_computer() {
                    return Ok(Flow::ScheduleReply(self.generation));
                }
            }
            Command::Show => self.show()?,
            Command::Hint => match self.session.hint() {
                Some(mv) => writeln!(self.out, "Hint: play {}", mv.square)?,
                None => writeln!(self.out, "No moves left.")?,
            },
            Command::Delay(delay) => {
                self.config.reply_delay = delay;
                writeln!(self.out, "Reply delay set to {} ms.", delay.as_millis())?;
            }
            Command::Help => self.help()?,
            Command::Quit => {
                self.generation += 1;
                return Ok(Flow::Quit);
            }
            Command::Unknown(word) => {
                if !word.is_empty() {
                    writeln!(self.out, "Unknown command: {word}. Type 'help'.")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Play the computer's reply if it still belongs to the current game.
    pub fn handle_computer_ready(&mut self, generation: u64) -> Result<(), TermError> {
        if generation != self.generation || !self.session.awaiting_computer() {
            debug!(generation, current = self.generation, "stale computer reply dropped");
            return Ok(());
        }
        match self.session.play_computer() {
            Ok(mv) => {
                writeln!(self.out, "Computer plays {}.", mv.square)?;
                self.show()
            }
            Err(e) => {
                warn!(error = %e, "computer move failed");
                Ok(())
            }
        }
    }

    fn schedule_reply(
        &mut self,
        generation: u64,
        tx: &mpsc::Sender<FrontendEvent>,
    ) -> Result<(), TermError> {
        let delay = self.config.reply_delay;
        if delay.is_zero() {
            return self.handle_computer_ready(generation);
        }
        let tx = tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(FrontendEvent::ComputerReady(generation));
        });
        Ok(())
    }

    fn show(&mut self) -> Result<(), TermError> {
        write!(self.out, "{}", self.session.board().pretty())?;
        let status = match self.session.outcome() {
            GameOutcome::Win(player) => format!("Player {player} wins!"),
            GameOutcome::Draw => "It's a draw!".to_string(),
            GameOutcome::InProgress if self.session.awaiting_computer() => {
                "Computer is thinking...".to_string()
            }
            GameOutcome::InProgress => format!("Player {}'s turn", self.session.current()),
        };
        writeln!(self.out, "{status}")?;
        Ok(())
    }

    fn help(&mut self) -> Result<(), TermError> {
        writeln!(self.out, "  <0-8> | play <0-8>   mark a square (0 is top left)")?;
        writeln!(self.out, "  new [pvp|cpu]        start over, optionally switching mode")?;
        writeln!(self.out, "  show                 print the board")?;
        writeln!(self.out, "  hint                 suggest a move")?;
        writeln!(self.out, "  delay <ms>           set the computer's reply delay")?;
        writeln!(self.out, "  quit                 leave")?;
        Ok(())
    }
}
