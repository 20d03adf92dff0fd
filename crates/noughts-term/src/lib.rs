//! Terminal front end for noughts.

pub mod command;
pub mod error;
pub mod frontend;

pub use command::{Command, parse_command, parse_mode};
pub use error::TermError;
pub use frontend::{Flow, Frontend, FrontendConfig};
