//! Front-end errors.

/// Errors that can occur while reading and interpreting player input.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// A command needs an argument that was not given.
    #[error("'{command}' needs an argument")]
    MissingArgument {
        /// The command keyword.
        command: String,
    },

    /// A square was not a number from 0 to 8.
    #[error("invalid square: {value} (expected 0-8)")]
    InvalidSquare {
        /// The text that failed to parse.
        value: String,
    },

    /// A delay was not a whole number of milliseconds.
    #[error("invalid delay: {value}")]
    InvalidDelay {
        /// The text that failed to parse.
        value: String,
    },

    /// The mode in `new <mode>` was not recognised.
    #[error("unknown mode: {value} (expected pvp or cpu)")]
    UnknownMode {
        /// The text that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
