use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::symbol::Symbol;
use crate::tree::CodeTree;

// The codec takes trees as given; tests need something that builds
// reasonable ones.
pub fn tree_from_weights(weights: &[(Symbol, u64)]) -> CodeTree {
    let mut nodes = Vec::with_capacity(2 * weights.len());
    let mut heap = BinaryHeap::new();

    for &(symbol, weight) in weights {
        heap.push(Reverse((weight, nodes.len())));
        nodes.push(Some(CodeTree::Leaf(symbol)));
    }

    while heap.len() > 1 {
        let Reverse((w0, i0)) = heap.pop().unwrap();
        let Reverse((w1, i1)) = heap.pop().unwrap();
        let left = nodes[i0].take().unwrap();
        let right = nodes[i1].take().unwrap();
        heap.push(Reverse((w0 + w1, nodes.len())));
        nodes.push(Some(CodeTree::internal(left, right)));
    }

    let Reverse((_, root)) = heap.pop().expect("tree_from_weights: no symbols");
    nodes[root].take().unwrap()
}

// Huffman tree over the bytes of `data` plus `EndOfStream`.
pub fn tree_for(data: &[u8]) -> CodeTree {
    let mut counts = [0u64; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    let mut weights: Vec<(Symbol, u64)> = counts.iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(byte, &count)| (Symbol::Byte(byte as u8), count))
        .collect();
    weights.push((Symbol::EndOfStream, 1));

    tree_from_weights(&weights)
}

// 'a' -> 0, 'b' -> 10, EndOfStream -> 11
pub fn abe_tree() -> CodeTree {
    CodeTree::internal(
        CodeTree::leaf(b'a'),
        CodeTree::internal(CodeTree::leaf(b'b'),
                           CodeTree::leaf(Symbol::EndOfStream)))
}

pub fn bits(s: &str) -> Vec<bool> {
    s.chars().map(|c| c == '1').collect()
}
