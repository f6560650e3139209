//! Errors returned by script commands.

use std::error::Error;
use std::fmt;

use hexmap_world::WorldError;

/// Why a script command failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// No command is registered under this name.
    UnknownCommand {
        /// The requested name.
        name: String,
    },
    /// Wrong number of arguments.
    Arity {
        /// The command.
        command: String,
        /// Fewest accepted arguments.
        min: usize,
        /// Most accepted arguments.
        max: usize,
        /// Arguments passed.
        got: usize,
    },
    /// An argument has the wrong type or an unusable value.
    BadArgument {
        /// The command.
        command: String,
        /// Zero-based argument position.
        index: usize,
        /// What was expected.
        expected: &'static str,
    },
    /// A player number outside the session.
    InvalidPlayer {
        /// The number passed.
        player: i64,
    },
    /// The world rejected the mutation.
    World(WorldError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { name } => write!(f, "unknown command '{name}'"),
            Self::Arity {
                command,
                min,
                max,
                got,
            } => {
                if min == max {
                    write!(f, "{command}: expected {min} arguments, got {got}")
                } else {
                    write!(f, "{command}: expected {min} to {max} arguments, got {got}")
                }
            }
            Self::BadArgument {
                command,
                index,
                expected,
            } => write!(f, "{command}: argument {index} must be {expected}"),
            Self::InvalidPlayer { player } => write!(f, "invalid player {player}"),
            Self::World(e) => write!(f, "world: {e}"),
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::World(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorldError> for ScriptError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}
