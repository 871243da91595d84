//! Error types for compression and decompression.

use std::io;

use thiserror::Error;

/// Everything that can go wrong while compressing or decompressing.
#[derive(Debug, Error)]
pub enum Error {
    /// The tree header could not be parsed, or the tree cannot be used
    /// for coding (duplicate leaves, no end-of-stream leaf, too deep).
    #[error("malformed code tree: {0}")]
    MalformedTree(String),

    /// The bit source ran out before the decoder reached a leaf.
    ///
    /// A well-formed container always ends on the end-of-stream code,
    /// so this is never a clean end of data.
    #[error("truncated stream: bit source exhausted mid-code after {bits_read} bits")]
    TruncatedStream {
        /// Bits consumed before the source ran dry.
        bits_read: u64,
    },

    /// An input byte has no code in the tree.
    #[error("byte {0:#04x} has no code in the tree")]
    UnknownSymbol(u8),

    /// The underlying byte stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// `Result` specialized to this crate's [`Error`](enum.Error.html).
pub type Result<T> = std::result::Result<T, Error>;
