//! Player command parsing.

use std::time::Duration;

use noughts_core::Square;
use noughts_engine::Mode;

use crate::error::TermError;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new [pvp|cpu]` -- start over, optionally switching mode.
    NewGame(Option<Mode>),
    /// `play <n>`, `play <row> <col>` or a bare `<n>` -- mark a square for
    /// the current player.
    Play(Square),
    /// `show` -- print the board and whose turn it is.
    Show,
    /// `hint` -- suggest the minimax move for the current player.
    Hint,
    /// `delay <ms>` -- set how long the computer waits before replying.
    Delay(Duration),
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, TermError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    if first.bytes().all(|b| b.is_ascii_digit()) {
        return parse_square(first).map(Command::Play);
    }

    match first.to_ascii_lowercase().as_str() {
        "new" | "reset" => match tokens.get(1) {
            Some(mode) => parse_mode(mode).map(|m| Command::NewGame(Some(m))),
            None => Ok(Command::NewGame(None)),
        },
        "play" | "p" => {
            let value = argument(&tokens, "play")?;
            match tokens.get(2) {
                Some(col) => parse_coords(value, col).map(Command::Play),
                None => parse_square(value).map(Command::Play),
            }
        }
        "show" | "board" => Ok(Command::Show),
        "hint" => Ok(Command::Hint),
        "delay" => {
            let value = argument(&tokens, "delay")?;
            let ms: u64 = value.parse().map_err(|_| TermError::InvalidDelay {
                value: value.to_string(),
            })?;
            Ok(Command::Delay(Duration::from_millis(ms)))
        }
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(first.to_string())),
    }
}

/// Parse a game mode name.
pub fn parse_mode(value: &str) -> Result<Mode, TermError> {
    match value.to_ascii_lowercase().as_str() {
        "pvp" | "two" | "2p" => Ok(Mode::TwoPlayer),
        "cpu" | "ai" | "computer" => Ok(Mode::VsComputer),
        _ => Err(TermError::UnknownMode {
            value: value.to_string(),
        }),
    }
}

/// Parse a square index, rejecting anything outside 0..=8.
fn parse_square(value: &str) -> Result<Square, TermError> {
    value
        .parse::<u8>()
        .ok()
        .and_then(Square::from_index)
        .ok_or_else(|| TermError::InvalidSquare {
            value: value.to_string(),
        })
}

/// Parse a zero-based row and column pair.
fn parse_coords(row: &str, col: &str) -> Result<Square, TermError> {
    let invalid = || TermError::InvalidSquare {
        value: format!("{row} {col}"),
    };
    let row: u8 = row.parse().map_err(|_| invalid())?;
    let col: u8 = col.parse().map_err(|_| invalid())?;
    Square::from_coords(row, col).ok_or_else(invalid)
}

fn argument<'a>(tokens: &[&'a str], command: &str) -> Result<&'a str, TermError> {
    tokens
        .get(1)
        .copied()
        .ok_or_else(|| TermError::MissingArgument {
            command: command.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_play() {
        assert_eq!(
            parse_command("play 4").unwrap(),
            Command::Play(Square::new(4))
        );
        assert_eq!(
            parse_command("  P 0 ").unwrap(),
            Command::Play(Square::new(0))
        );
    }

    #[test]
    fn parse_row_col() {
        assert_eq!(
            parse_command("play 1 2").unwrap(),
            Command::Play(Square::new(5))
        );
        assert!(matches!(
            parse_command("play 3 0"),
            Err(TermError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_bare_square() {
        assert_eq!(parse_command("8").unwrap(), Command::Play(Square::new(8)));
    }

    #[test]
    fn parse_square_out_of_range() {
        assert!(matches!(
            parse_command("9"),
            Err(TermError::InvalidSquare { .. })
        ));
        assert!(matches!(
            parse_command("play 300"),
            Err(TermError::InvalidSquare { .. })
        ));
        assert!(matches!(
            parse_command("play x"),
            Err(TermError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_play_missing_square() {
        assert!(matches!(
            parse_command("play"),
            Err(TermError::MissingArgument { .. })
        ));
    }

    #[test]
    fn parse_new_game() {
        assert_eq!(parse_command("new").unwrap(), Command::NewGame(None));
        assert_eq!(
            parse_command("NEW pvp").unwrap(),
            Command::NewGame(Some(Mode::TwoPlayer))
        );
        assert_eq!(
            parse_command("reset cpu").unwrap(),
            Command::NewGame(Some(Mode::VsComputer))
        );
        assert!(matches!(
            parse_command("new chess"),
            Err(TermError::UnknownMode { .. })
        ));
    }

    #[test]
    fn parse_delay() {
        assert_eq!(
            parse_command("delay 250").unwrap(),
            Command::Delay(Duration::from_millis(250))
        );
        assert!(matches!(
            parse_command("delay soon"),
            Err(TermError::InvalidDelay { .. })
        ));
        assert!(matches!(
            parse_command("delay"),
            Err(TermError::MissingArgument { .. })
        ));
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("hint").unwrap(), Command::Hint);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            parse_command("castle").unwrap(),
            Command::Unknown("castle".to_string())
        );
    }

    #[test]
    fn parse_empty_line() {
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
    }
}
