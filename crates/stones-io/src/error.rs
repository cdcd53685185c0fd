//! Input errors.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Errors from reading or parsing stone values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The input file could not be read.
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error, rendered.
        reason: String,
    },
    /// A token is not a base-10 integer that fits in a stone value.
    Malformed {
        /// 1-based line of the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A token is a negative integer.
    Negative {
        /// 1-based line of the token.
        line: usize,
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => {
                write!(f, "cannot read {}: {reason}", path.display())
            }
            Self::Malformed { line, token } => {
                write!(f, "line {line}: '{token}' is not a stone value")
            }
            Self::Negative { line, token } => {
                write!(f, "line {line}: stone values must be non-negative, got '{token}'")
            }
        }
    }
}

impl Error for InputError {}
