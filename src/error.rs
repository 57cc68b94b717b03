//! Errors raised while building shapes, figures and scenes.
//!
//! Subdividing and reverting never fail, only construction does.

use thiserror::Error;

/// Everything which can go wrong in this crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A shape needs at least two points to have an edge
    #[error("a shape needs at least 2 points, got {len}")]
    TooFewPoints {
        /// Number of points which were given
        len: usize,
    },

    /// Drawing attributes or settings which can't be used
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A command which is neither "advance" nor "revert"
    #[error("unknown command {0:?}, expected \"advance\" (+) or \"revert\" (-)")]
    UnknownCommand(String),
}

/// Result with this crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
