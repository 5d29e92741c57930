use super::{HuffmanTree, Node, NodeId};
use crate::encoding::frequency::FrequencyTable;
use alloc::collections::BinaryHeap;
use core::cmp::Reverse;

impl HuffmanTree {
    /// Build the tree that minimizes the encoded length of an input with the given symbol frequencies.
    ///
    /// Every symbol with a nonzero frequency gets a leaf, inserted in ascending symbol order.
    /// The two lightest nodes are then merged under a new internal node until one node is left,
    /// the first one taken becoming the left child. Nodes of equal weight are taken in the order they
    /// were inserted, so the same table always produces the same tree.
    ///
    /// A table with a single used symbol produces a tree whose root is that symbol's leaf.
    /// A table without any used symbol produces an empty tree.
    pub fn build(frequencies: &FrequencyTable) -> HuffmanTree {
        let mut tree = HuffmanTree::new();
        // NodeIds are allocated in insertion order, which makes them the tie breaker
        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();

        for (symbol, count) in frequencies.iter_used() {
            let leaf = tree.push_node(Node::leaf(count, symbol));
            tree.register_leaf(symbol, leaf);
            heap.push(Reverse((count, leaf)));
        }

        loop {
            let Some(Reverse((left_weight, left))) = heap.pop() else {
                break;
            };
            let Some(Reverse((right_weight, right))) = heap.pop() else {
                tree.set_root(left);
                break;
            };
            let weight = left_weight + right_weight;

            let parent = tree.push_node(Node::internal(weight, left, right));
            tree.node_mut(left).parent = Some(parent);
            tree.node_mut(right).parent = Some(parent);
            heap.push(Reverse((weight, parent)));
        }

        vprintln!(
            "Built huffman tree with {} leaves and {} nodes",
            tree.leaf_count(),
            tree.len()
        );
        tree
    }
}

#[cfg(test)]
mod tests {
    use crate::encoding::frequency::FrequencyTable;
    use crate::tree::HuffmanTree;

    fn table(pairs: &[(u8, u64)]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &(symbol, count) in pairs {
            table.add(symbol, count);
        }
        table
    }

    #[test]
    fn two_symbols_share_one_parent() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"aaab"));
        let root = tree.node(tree.root().unwrap());
        assert_eq!(root.weight, 4);
        assert!(root.parent.is_none());

        // b is lighter and taken first
        let left = tree.node(root.left.unwrap());
        let right = tree.node(root.right.unwrap());
        assert!(left.is_leaf() && right.is_leaf());
        assert_eq!((left.symbol, left.weight), (b'b', 1));
        assert_eq!((right.symbol, right.weight), (b'a', 3));
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn single_symbol_is_the_root() {
        let tree = HuffmanTree::build(&table(&[(b'z', 17)]));
        let root = tree.root().unwrap();
        assert_eq!(tree.leaf(b'z'), Some(root));
        assert!(tree.node(root).is_leaf());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn all_zero_frequencies_give_an_empty_tree() {
        let tree = HuffmanTree::build(&FrequencyTable::new());
        assert!(tree.is_empty());
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn equal_weights_are_taken_in_insertion_order() {
        let tree = HuffmanTree::build(&table(&[(1, 1), (2, 1), (3, 1), (4, 1)]));
        let root = tree.node(tree.root().unwrap());
        let left = tree.node(root.left.unwrap());
        let right = tree.node(root.right.unwrap());
        // (1, 2) are merged first, then (3, 4), then the two parents in creation order
        assert_eq!(tree.node(left.left.unwrap()).symbol, 1);
        assert_eq!(tree.node(left.right.unwrap()).symbol, 2);
        assert_eq!(tree.node(right.left.unwrap()).symbol, 3);
        assert_eq!(tree.node(right.right.unwrap()).symbol, 4);
    }

    #[test]
    fn weights_add_up() {
        let frequencies = table(&[(0, 5), (10, 9), (20, 12), (30, 13), (40, 16), (50, 45)]);
        let tree = HuffmanTree::build(&frequencies);
        let root = tree.node(tree.root().unwrap());
        assert_eq!(root.weight, frequencies.total());

        for id in 0..tree.len() {
            let node = tree.node(crate::tree::NodeId(id));
            if let (Some(l), Some(r)) = (node.left, node.right) {
                assert_eq!(node.weight, tree.node(l).weight + tree.node(r).weight);
                assert_eq!(tree.node(l).parent, Some(crate::tree::NodeId(id)));
                assert_eq!(tree.node(r).parent, Some(crate::tree::NodeId(id)));
            } else {
                assert!(node.left.is_none() && node.right.is_none());
            }
        }
    }

    #[test]
    fn builds_are_deterministic() {
        let frequencies = FrequencyTable::from_bytes(b"abracadabra, said the wizard to the lizard");
        let first = HuffmanTree::build(&frequencies);
        let second = HuffmanTree::build(&frequencies);
        assert!(first.is_isomorphic(&second));
    }

    #[test]
    fn full_alphabet() {
        let mut frequencies = FrequencyTable::new();
        for symbol in 0..=255u8 {
            frequencies.add(symbol, u64::from(symbol) + 1);
        }
        let tree = HuffmanTree::build(&frequencies);
        assert_eq!(tree.leaf_count(), 256);
        assert_eq!(tree.len(), 511);
    }
}
