//! Error types for memory buffer access.
//!
//! All failures are synchronous and typed; there is nothing transient to
//! retry against since every operation is a pure in-memory computation.

use thiserror::Error;

/// Errors raised by memory buffer operations.
#[derive(Debug, Error)]
pub enum MemBufferError {
    /// A strict scalar read required bytes outside the buffer's bounds.
    ///
    /// Raised by `get_byte` and every fixed-width or big-integer read when
    /// any required byte is missing. Never raised by the best-effort
    /// `get_bytes` bulk copy.
    #[error("offset {offset:#x} is not in range")]
    OutOfRange { offset: u64 },

    /// A capability this buffer variant permanently lacks.
    ///
    /// Raised by any attempt to obtain a live memory handle from a buffer
    /// with no backing memory system. Callers should treat this as a
    /// capability check, not a transient failure.
    #[error("operation not supported: {0}")]
    Unsupported(String),
}

/// Result type alias for memory buffer operations.
pub type Result<T> = std::result::Result<T, MemBufferError>;
