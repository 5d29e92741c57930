use crate::common::SYMBOL_BITS;
use crate::encoding::bit_writer::BitWriter;
use crate::encoding::errors::EncodeError;
use crate::io::{Error, Write};
use crate::tree::{HuffmanTree, NodeId};
use core::convert::TryFrom;

/// Number of bits the payload takes when every symbol is encoded as often as its leaf's weight says.
///
/// Derives the code of every symbol on the way.
pub fn payload_bits(tree: &mut HuffmanTree) -> u64 {
    tree.derive_all_codes();
    let mut bits = 0;
    for symbol in 0..=255u8 {
        if let Some(leaf) = tree.leaf(symbol) {
            let weight = tree.node(leaf).weight;
            let code_len = tree.get_code(symbol).map_or(0, |code| code.len()) as u64;
            bits += code_len * weight;
        }
    }
    bits
}

/// Write the payload bit count and the tree in preorder, returning the bit count.
///
/// All codes are derived and the code cache is frozen before anything is written.
/// Writing the header of an empty tree writes nothing.
pub fn write_header<W: Write>(
    tree: &mut HuffmanTree,
    writer: &mut BitWriter<W>,
) -> Result<u32, EncodeError> {
    let bits = payload_bits(tree);
    tree.freeze_codes();
    let bits = u32::try_from(bits).map_err(|_| EncodeError::PayloadTooLarge { bits })?;

    let root = match tree.root() {
        Some(root) => root,
        None => return Ok(0),
    };

    writer.write_u32(bits)?;
    write_node(tree, root, writer)?;
    vprintln!(
        "Wrote tree header with {} leaves, payload is {} bits",
        tree.leaf_count(),
        bits
    );
    Ok(bits)
}

fn write_node<W: Write>(
    tree: &HuffmanTree,
    id: NodeId,
    writer: &mut BitWriter<W>,
) -> Result<(), Error> {
    let node = tree.node(id);
    match (node.left, node.right) {
        (Some(left), Some(right)) => {
            writer.write_bit(false)?;
            write_node(tree, left, writer)?;
            write_node(tree, right, writer)
        }
        _ => {
            writer.write_bit(true)?;
            writer.write_value(u64::from(node.symbol), SYMBOL_BITS)
        }
    }
}
