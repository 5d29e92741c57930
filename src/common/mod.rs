//! Values shared between the encoding side
//! and the decoding side.

/// Number of distinct symbols. Every byte value is a symbol.
pub const ALPHABET_SIZE: usize = 256;

/// Width of a leaf's symbol field in the tree header.
pub const SYMBOL_BITS: u32 = 8;

/// A tree over [ALPHABET_SIZE] leaves has at most `ALPHABET_SIZE - 1` internal nodes
/// on any root to leaf path.
pub const MAX_TREE_DEPTH: usize = ALPHABET_SIZE - 1;
