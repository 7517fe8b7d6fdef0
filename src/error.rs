//! Crate-level error types.
//!
//! The tick-driven state machines never fail; errors only arise at the
//! edges where text is turned into options, scenes, or commands.

use std::fmt;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scene description parsing failure.
    SceneParse(String),
    /// Message name not recognized by the command router.
    UnknownCommand(String),
    /// Message recognized but its positional parameters are malformed.
    BadParameters {
        /// Message name.
        command: String,
        /// What was wrong with the parameters.
        reason: String,
    },
}

impl VantageError {
    /// Shorthand for a [`VantageError::BadParameters`].
    pub(crate) fn bad_params(command: &str, reason: impl Into<String>) -> Self {
        Self::BadParameters {
            command: command.to_owned(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SceneParse(msg) => write!(f, "scene parse error: {msg}"),
            Self::UnknownCommand(name) => {
                write!(f, "unknown command: {name}")
            }
            Self::BadParameters { command, reason } => {
                write!(f, "bad parameters for {command}: {reason}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
