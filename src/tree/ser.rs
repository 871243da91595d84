//! Wire format for code trees.
//!
//! Trees are written in pre-order. An internal node is a `1` bit followed
//! by its left and then its right subtree. A leaf is a `0` bit followed by
//! the symbol's `SYMBOL_BITS`-wide index, most significant bit first.
//!
//! ```text
//!        *              1
//!       / \             0 001100001    'a'
//!     'a'  *            1
//!         / \           0 001100010    'b'
//!       'b'  EOS        0 100000000    EOS
//! ```

use std::io::ErrorKind;

use crate::errors::Result;
use crate::internal::errors::*;
use crate::stream::{BitRead, BitReader, BitWrite, BitWriter};
use crate::symbol::{Symbol, SYMBOL_BITS};
use crate::tree::{CodeTree, MAX_CODE_LEN};

/// Writes `tree` to `sink` without padding.
///
/// Fails with `MalformedTree`, before writing anything, if the tree is
/// deeper than `MAX_CODE_LEN` and so could not be read back.
pub fn write_tree<W: BitWrite>(tree: &CodeTree, sink: &mut W) -> Result<()> {
    if tree.depth() > MAX_CODE_LEN {
        return malformed("write_tree", "tree is deeper than 256 levels");
    }

    write_node(tree, sink)
}

fn write_node<W: BitWrite>(node: &CodeTree, sink: &mut W) -> Result<()> {
    match *node {
        CodeTree::Leaf(symbol) => {
            sink.write_bit(false)?;
            sink.write_int(SYMBOL_BITS, symbol.index())?;
        }
        CodeTree::Internal(ref left, ref right) => {
            sink.write_bit(true)?;
            write_node(left, sink)?;
            write_node(right, sink)?;
        }
    }

    Ok(())
}

/// Reads one tree from `source`, leaving it positioned at the first bit
/// after the tree.
///
/// Any failure to parse, including an empty source, is `MalformedTree`;
/// I/O errors from the source pass through.
pub fn read_tree<R: BitRead>(source: &mut R) -> Result<CodeTree> {
    read_node(source, 0)
}

fn read_node<R: BitRead>(source: &mut R, depth: usize) -> Result<CodeTree> {
    match source.read_bit()? {
        None => malformed("read_tree", "header ends before the tree is complete"),

        Some(true) => {
            if depth >= MAX_CODE_LEN {
                return malformed("read_tree", "tree is deeper than 256 levels");
            }
            let left = read_node(source, depth + 1)?;
            let right = read_node(source, depth + 1)?;
            Ok(CodeTree::internal(left, right))
        }

        Some(false) => {
            let index = match source.read_int::<u16>(SYMBOL_BITS) {
                Ok(Some(index)) => index,
                Ok(None) => {
                    return malformed("read_tree", "header ends inside a leaf");
                }
                Err(ref e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return malformed("read_tree", "header ends inside a leaf");
                }
                Err(e) => return Err(e.into()),
            };

            match Symbol::from_index(index) {
                Some(symbol) => Ok(CodeTree::Leaf(symbol)),
                None => malformed("read_tree",
                                  &format!("symbol index {} out of range", index)),
            }
        }
    }
}

/// Serializes `tree` on its own, padded with 0s to a whole byte.
pub fn serialize(tree: &CodeTree) -> Result<Vec<u8>> {
    let mut writer = BitWriter::new(Vec::<u8>::new());
    write_tree(tree, &mut writer)?;
    writer.flush_with_padding()?;
    Ok(writer.into_inner())
}

/// Deserializes a tree produced by [`serialize`](fn.serialize.html).
/// Padding after the tree is ignored.
pub fn deserialize(bytes: &[u8]) -> Result<CodeTree> {
    read_tree(&mut BitReader::new(bytes))
}
