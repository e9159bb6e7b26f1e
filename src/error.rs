use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the simulation library.
///
/// A dropped message (full mailbox) is deliberately *not* an error; it is
/// an observable outcome counted by [`crate::Mailbox::dropped`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid simulation parameters, reported before anything starts.
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    /// Vector operation called with mismatched lengths.
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Process id outside `[0, num_processes)`.
    #[error("process id {id} out of range (have {count} processes)")]
    ProcessOutOfRange { id: usize, count: usize },
}

impl Error {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }
}
