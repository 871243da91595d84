use std::io::Write;

use crate::errors::Result;
use crate::internal::errors::*;
use crate::stream::BitRead;
use crate::symbol::Symbol;
use crate::tree::CodeTree;

/// Turns prefix codes back into symbols by walking a code tree.
#[derive(Clone, Debug)]
pub struct Decoder {
    tree: CodeTree,
    terminates: bool,
}

impl Decoder {
    /// Creates a decoder for `tree`. Any tree is accepted, including a
    /// single leaf, whose code is zero bits long.
    pub fn new(tree: CodeTree) -> Self {
        let terminates = tree.contains(Symbol::EndOfStream);
        Decoder { tree, terminates }
    }

    /// The tree this decoder walks.
    #[inline]
    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }

    /// Reads one code from `source` and returns its symbol.
    ///
    /// Reads exactly as many bits as the code is long, so a single-leaf
    /// tree reads none. Fails with `TruncatedStream` if `source` runs dry
    /// before a leaf is reached; `bits_read` counts the bits of this code.
    pub fn decode_next<R: BitRead>(&self, source: &mut R) -> Result<Symbol> {
        let mut bits_read = 0;
        self.walk(source, &mut bits_read)
    }

    fn walk<R: BitRead>(&self, source: &mut R, bits_read: &mut u64) -> Result<Symbol> {
        let mut node = &self.tree;

        loop {
            match *node {
                CodeTree::Leaf(symbol) => return Ok(symbol),
                CodeTree::Internal(ref left, ref right) => {
                    node = match source.read_bit()? {
                        Some(bit) => {
                            *bits_read += 1;
                            if bit { &**right } else { &**left }
                        }
                        None => return truncated(*bits_read),
                    };
                }
            }
        }
    }

    /// Decodes symbols from `source` into `output` until `EndOfStream`,
    /// returning the number of bytes written.
    ///
    /// Fails with `MalformedTree`, before reading anything, if the tree has
    /// no `EndOfStream` leaf, since the loop could never end. On
    /// `TruncatedStream`, `bits_read` counts every bit this call consumed.
    /// Bits after the end-of-stream code are padding and are left unread.
    pub fn decode<R: BitRead, W: Write>(&self, source: &mut R, output: &mut W) -> Result<u64> {
        if !self.terminates {
            return malformed("Decoder::decode", "tree has no end-of-stream leaf");
        }

        let mut written = 0;
        let mut bits_read = 0;

        loop {
            match self.walk(source, &mut bits_read) {
                Ok(Symbol::Byte(byte)) => {
                    output.write_all(&[byte])?;
                    written += 1;
                }
                Ok(Symbol::EndOfStream) => {
                    log::trace!("decoded {} bytes from {} bits", written, bits_read);
                    return Ok(written);
                }
                Err(e) => {
                    log::debug!("decoding stopped after {} bytes: {}", written, e);
                    return Err(e);
                }
            }
        }
    }
}
