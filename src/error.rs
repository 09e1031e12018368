//! Error types for the two fallible boundary operations.
//!
//! Everything else in this crate is total: state queries, accessors, and
//! constructors cannot fail. After a failed decode or scan the target
//! container is unreliable and must be discarded, not reused.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TriStateError>;

/// A failure crossing one of the two boundaries.
#[derive(Debug, Error)]
pub enum TriStateError {
    /// JSON bytes failed to encode or decode as the payload type
    /// (malformed JSON or type mismatch). Propagated verbatim from the
    /// JSON engine.
    #[error("JSON codec error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A fetched column value failed to convert into the payload type.
    /// Propagated verbatim from the driver layer.
    #[error("column scan error: {0}")]
    Scan(#[from] rusqlite::types::FromSqlError),
}
