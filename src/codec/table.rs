use crate::errors::Result;
use crate::internal::errors::*;
use crate::symbol::{Symbol, ALPHABET_SIZE};
use crate::tree::{CodeTree, MAX_CODE_LEN};

/// Maps each symbol of a tree to its code, the root-to-leaf path with
/// `false` for left and `true` for right.
#[derive(Clone, Debug)]
pub struct EncodingTable {
    // Indexed by `Symbol::index`.
    codes: Vec<Option<Vec<bool>>>,
}

impl EncodingTable {
    /// Builds the table with one traversal of `tree`.
    ///
    /// Fails with `MalformedTree` if two leaves share a symbol or if a code
    /// would be longer than `MAX_CODE_LEN`.
    pub fn new(tree: &CodeTree) -> Result<Self> {
        let mut codes = vec![None; ALPHABET_SIZE];
        let mut path = Vec::new();
        collect(tree, &mut path, &mut codes)?;
        Ok(EncodingTable { codes })
    }

    /// The code for `symbol`, if the tree has a leaf for it.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<&[bool]> {
        self.codes[symbol.index() as usize].as_ref().map(Vec::as_slice)
    }

    /// Can `symbol` be encoded?
    #[inline]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.codes[symbol.index() as usize].is_some()
    }

    /// The number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// Always false: every tree has at least one leaf.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over `(symbol, code)` pairs in symbol order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (Symbol, &'a [bool])> + 'a {
        self.codes.iter().enumerate().filter_map(|(index, code)| {
            let symbol = Symbol::from_index(index as u16)?;
            code.as_ref().map(|code| (symbol, code.as_slice()))
        })
    }
}

fn collect(node: &CodeTree,
           path: &mut Vec<bool>,
           codes: &mut [Option<Vec<bool>>]) -> Result<()> {
    match *node {
        CodeTree::Leaf(symbol) => {
            let slot = &mut codes[symbol.index() as usize];
            if slot.is_some() {
                return malformed("EncodingTable::new",
                                 &format!("symbol {} appears twice", symbol));
            }
            *slot = Some(path.clone());
        }

        CodeTree::Internal(ref left, ref right) => {
            if path.len() >= MAX_CODE_LEN {
                return malformed("EncodingTable::new", "tree is deeper than 256 levels");
            }

            path.push(false);
            collect(left, path, codes)?;
            path.pop();

            path.push(true);
            collect(right, path, codes)?;
            path.pop();
        }
    }

    Ok(())
}
