//! Lossless byte-stream compression with a prefix-free (Huffman) code.
//!
//! The caller supplies a [`CodeTree`](tree/enum.CodeTree.html), usually
//! built from byte frequencies. Compression writes:
//!
//!   - the tree, in a compact pre-order bit encoding;
//!   - one code per input byte;
//!   - the code for [`Symbol::EndOfStream`](symbol/enum.Symbol.html); and
//!   - 0 bits up to the next byte boundary.
//!
//! Decompression reads the tree back and decodes until it reaches the
//! end-of-stream symbol, so the container needs no length field.
//!
//! # Usage
//!
//! ```rust
//! use huffman_codec::{compress_to_vec, decompress_to_vec, CodeTree, Symbol};
//!
//! // 'a' -> 0, 'b' -> 10, end of stream -> 11
//! let tree = CodeTree::internal(
//!     CodeTree::leaf(b'a'),
//!     CodeTree::internal(CodeTree::leaf(b'b'), CodeTree::leaf(Symbol::EndOfStream)));
//!
//! let container = compress_to_vec(&tree, b"aab").unwrap();
//! assert_eq!(0b0010_1100, *container.last().unwrap());
//! assert_eq!(b"aab".to_vec(), decompress_to_vec(&container).unwrap());
//! ```
//!
//! The [`stream`](stream/index.html) module has the bit readers and
//! writers the codec runs on, and [`codec`](codec/index.html) exposes the
//! encoder and decoder for callers that manage their own streams.

#![warn(missing_docs)]

mod internal;

mod errors;
pub use errors::{Error, Result};

pub mod stream;

pub mod symbol;
pub use symbol::Symbol;

pub mod tree;
pub use tree::CodeTree;

pub mod codec;
pub use codec::{Decoder, Encoder, EncodingTable};

mod pipeline;
pub use pipeline::*;

#[cfg(test)]
mod test_helpers;
