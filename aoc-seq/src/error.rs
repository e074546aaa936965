//! Error types for the sequence toolkit

use thiserror::Error;

/// Error type for fallible sequence operations.
///
/// Every failure in this crate is synchronous and reported to the immediate
/// caller; there are no transient conditions worth retrying. Operations that
/// can spin forever on infinite input (for example draining `forever` into a
/// `Vec`) are a documented caller obligation, not an error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// `reduce` was called without an initializer on an empty sequence
    #[error("empty sequence and no initializer")]
    EmptySequence,
    /// `chunks` requires a chunk size of at least one
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
    /// `modulo` or `divmod` was given a zero divisor
    #[error("division by zero")]
    DivisionByZero,
}
