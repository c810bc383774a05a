//! Command script error module.

use thiserror::Error;

/// Errors raised while parsing a command script.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ScriptError {
    /// The first word of a line is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// 1-based line number
        line: usize,
        /// The unrecognized word
        command: String,
    },

    /// A command that takes a key was given none.
    #[error("line {line}: '{command}' requires a key")]
    MissingKey {
        /// 1-based line number
        line: usize,
        /// The command name
        command: String,
    },

    /// A command was given more arguments than it accepts.
    #[error("line {line}: unexpected argument '{argument}' for '{command}'")]
    UnexpectedArgument {
        /// 1-based line number
        line: usize,
        /// The command name
        command: String,
        /// The first surplus argument
        argument: String,
    },
}
