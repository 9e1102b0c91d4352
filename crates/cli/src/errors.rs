use dnastrand::StrandError;
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Error raised while reading or executing a shell command.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no entry at index {index} (registry holds {len})")]
    NoSuchEntry { index: usize, len: usize },

    #[error("opcode '{opcode}' is missing operand <{operand}>")]
    MissingOperand {
        opcode: char,
        operand: &'static str,
    },

    #[error("invalid number {token:?} for operand <{operand}>")]
    InvalidNumber {
        token: String,
        operand: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown opcode {0:?}")]
    UnknownOpcode(String),

    #[error(transparent)]
    Strand(#[from] StrandError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Return `true` if the session can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
