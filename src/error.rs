//! Error types.
//!
//! Every list operation in this crate is total. The only fallible surface is
//! parsing values that arrive as free-form strings.

use thiserror::Error;

/// Error type for status helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A condition status string other than "True", "False" or "Unknown"
    #[error("Invalid condition status: {0:?} (expected \"True\", \"False\" or \"Unknown\")")]
    InvalidConditionStatus(String),
}

/// Result type alias for status helpers
pub type Result<T> = std::result::Result<T, Error>;
