// error.rs

use thiserror::Error;

/// Failures reported by [`CalcHistory`](crate::history::CalcHistory).
///
/// Both variants are recoverable: the history is left exactly as it was
/// before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The operation cannot be computed (division by zero, unknown operator).
    #[error("{0}")]
    InvalidOperation(String),
    /// Undo was requested with nothing to undo.
    #[error("No operations to remove.")]
    EmptyHistory,
}

impl CalcError {
    pub fn invalid<T: Into<String>>(msg: T) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

pub type Result<T, E = CalcError> = std::result::Result<T, E>;
