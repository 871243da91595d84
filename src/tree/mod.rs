//! Prefix-code trees.
//!
//! A [`CodeTree`](enum.CodeTree.html) is built by the caller, typically from
//! symbol frequencies, and handed to the encoder. Its root-to-leaf paths
//! are the codes: a left edge is a `0` bit and a right edge is a `1` bit.

use crate::symbol::Symbol;

mod ser;
pub use self::ser::*;

/// Longest code any usable tree can have.
///
/// A tree whose leaves are distinct symbols has at most
/// `ALPHABET_SIZE` leaves, so no leaf sits deeper than this.
pub const MAX_CODE_LEN: usize = crate::symbol::ALPHABET_SIZE - 1;

/// A binary tree whose leaves carry symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodeTree {
    /// A leaf, reached after reading its whole code.
    Leaf(Symbol),
    /// An internal node with its `0` (left) and `1` (right) subtrees.
    Internal(Box<CodeTree>, Box<CodeTree>),
}

impl CodeTree {
    /// Creates a leaf.
    #[inline]
    pub fn leaf<S: Into<Symbol>>(symbol: S) -> Self {
        CodeTree::Leaf(symbol.into())
    }

    /// Creates an internal node over two subtrees.
    #[inline]
    pub fn internal(left: CodeTree, right: CodeTree) -> Self {
        CodeTree::Internal(Box::new(left), Box::new(right))
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        match *self {
            CodeTree::Leaf(_) => true,
            CodeTree::Internal(..) => false,
        }
    }

    /// The symbol of a leaf, or `None` for an internal node.
    #[inline]
    pub fn symbol(&self) -> Option<Symbol> {
        match *self {
            CodeTree::Leaf(symbol) => Some(symbol),
            CodeTree::Internal(..) => None,
        }
    }

    /// The `0` subtree, or `None` at a leaf.
    #[inline]
    pub fn left(&self) -> Option<&CodeTree> {
        match *self {
            CodeTree::Leaf(_) => None,
            CodeTree::Internal(ref left, _) => Some(&**left),
        }
    }

    /// The `1` subtree, or `None` at a leaf.
    #[inline]
    pub fn right(&self) -> Option<&CodeTree> {
        match *self {
            CodeTree::Leaf(_) => None,
            CodeTree::Internal(_, ref right) => Some(&**right),
        }
    }

    /// The subtree reached by reading `bit` at this node, or `None` at a
    /// leaf.
    #[inline]
    pub fn child(&self, bit: bool) -> Option<&CodeTree> {
        if bit { self.right() } else { self.left() }
    }

    /// The number of leaves.
    pub fn leaf_count(&self) -> usize {
        match *self {
            CodeTree::Leaf(_) => 1,
            CodeTree::Internal(ref left, ref right) => {
                left.leaf_count() + right.leaf_count()
            }
        }
    }

    /// The length of the longest code, 0 for a single leaf.
    pub fn depth(&self) -> usize {
        match *self {
            CodeTree::Leaf(_) => 0,
            CodeTree::Internal(ref left, ref right) => {
                1 + left.depth().max(right.depth())
            }
        }
    }

    /// Does some leaf carry `symbol`?
    pub fn contains(&self, symbol: Symbol) -> bool {
        match *self {
            CodeTree::Leaf(leaf) => leaf == symbol,
            CodeTree::Internal(ref left, ref right) => {
                left.contains(symbol) || right.contains(symbol)
            }
        }
    }
}
