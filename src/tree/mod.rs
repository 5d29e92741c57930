//! Huffman coding is a method of encoding where symbols are assigned a code,
//! and more commonly used symbols get shorter codes, and less commonly
//! used symbols get longer codes. Codes are prefix free, meaning no code
//! is the start of another code.
//!
//! A [HuffmanTree] is built from a [FrequencyTable](crate::FrequencyTable) when
//! compressing and read back from the tree header when decompressing.
//! The code of a symbol is the path from the root to its leaf, `0` for every step
//! to a left child and `1` for every step to a right child.
mod build;
mod code;
mod node;

pub use code::Code;
pub use node::{Node, NodeId};

use crate::common::ALPHABET_SIZE;
use alloc::vec::Vec;

/// A Huffman tree together with the index from symbols to their leaves and the
/// cache of derived codes.
///
/// Nodes live in an arena and refer to each other by [NodeId]. Dropping the tree
/// frees every node at once.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    /// Index is the symbol, `Some` exactly for the symbols that have a leaf
    leaves: [Option<NodeId>; ALPHABET_SIZE],
    /// Index is the symbol
    codes: Vec<Option<Code>>,
    codes_frozen: bool,
}

impl Default for HuffmanTree {
    fn default() -> Self {
        Self::new()
    }
}

impl HuffmanTree {
    /// An empty tree without any nodes
    pub fn new() -> HuffmanTree {
        HuffmanTree {
            nodes: Vec::new(),
            root: None,
            leaves: [None; ALPHABET_SIZE],
            codes: alloc::vec![None; ALPHABET_SIZE],
            codes_frozen: false,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree, leaves included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The leaf that holds `symbol`, if the symbol occurs in the tree
    pub fn leaf(&self, symbol: u8) -> Option<NodeId> {
        self.leaves[symbol as usize]
    }

    /// Symbols that have a leaf, in ascending order
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.leaves
            .iter()
            .enumerate()
            .filter(|(_, leaf)| leaf.is_some())
            .map(|(symbol, _)| symbol as u8)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.iter().filter(|leaf| leaf.is_some()).count()
    }

    /// Two trees are isomorphic if they have the same shape and the same symbol on
    /// every corresponding leaf. Weights and arena layout are not compared.
    pub fn is_isomorphic(&self, other: &HuffmanTree) -> bool {
        match (self.root, other.root) {
            (None, None) => true,
            (Some(left), Some(right)) => self.subtree_isomorphic(left, other, right),
            _ => false,
        }
    }

    fn subtree_isomorphic(&self, id: NodeId, other: &HuffmanTree, other_id: NodeId) -> bool {
        let node = self.node(id);
        let other_node = other.node(other_id);
        match (node.left, node.right, other_node.left, other_node.right) {
            (None, None, None, None) => node.symbol == other_node.symbol,
            (Some(l), Some(r), Some(other_l), Some(other_r)) => {
                self.subtree_isomorphic(l, other, other_l)
                    && self.subtree_isomorphic(r, other, other_r)
            }
            _ => false,
        }
    }

    pub(crate) fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub(crate) fn register_leaf(&mut self, symbol: u8, leaf: NodeId) {
        self.leaves[symbol as usize] = Some(leaf);
    }
}

/// Compresses and decompresses `data`, panicking if the result differs from the input
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(data: &[u8]) {
    let compressed = crate::compress_to_vec(data).unwrap();
    let decompressed = crate::decompress_to_vec(&compressed).unwrap();
    assert_eq!(data, &decompressed[..]);
}
