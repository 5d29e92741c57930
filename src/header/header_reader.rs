use crate::common::{MAX_TREE_DEPTH, SYMBOL_BITS};
use crate::decoding::bit_reader::BitReader;
use crate::decoding::errors::ReadHeaderError;
use crate::io::Read;
use crate::tree::{HuffmanTree, Node, NodeId};

/// Read the payload bit count and rebuild the tree written by [write_header](super::write_header).
///
/// Node weights are not part of the header, every node of the returned tree has weight zero.
pub fn read_header<R: Read>(
    reader: &mut BitReader<R>,
) -> Result<(HuffmanTree, u32), ReadHeaderError> {
    let bits = reader
        .read_u32()
        .map_err(ReadHeaderError::TruncatedBitCount)?;

    let mut tree = HuffmanTree::new();
    let root = read_node(reader, &mut tree, None, 0)?;
    tree.set_root(root);

    vprintln!(
        "Read tree header with {} leaves, payload is {} bits",
        tree.leaf_count(),
        bits
    );
    Ok((tree, bits))
}

fn read_node<R: Read>(
    reader: &mut BitReader<R>,
    tree: &mut HuffmanTree,
    parent: Option<NodeId>,
    depth: usize,
) -> Result<NodeId, ReadHeaderError> {
    use ReadHeaderError as err;

    let is_leaf = reader.read_bit().map_err(err::TruncatedTree)?;
    if is_leaf {
        let symbol = reader
            .read_value(SYMBOL_BITS)
            .map_err(err::TruncatedTree)? as u8;
        if tree.leaf(symbol).is_some() {
            return Err(err::DuplicateSymbol { symbol });
        }
        let mut leaf = Node::leaf(0, symbol);
        leaf.parent = parent;
        let id = tree.push_node(leaf);
        tree.register_leaf(symbol, id);
        return Ok(id);
    }

    if depth >= MAX_TREE_DEPTH {
        return Err(err::TooDeep {
            max_depth: MAX_TREE_DEPTH,
        });
    }

    // children are linked once both subtrees are read
    let mut internal = Node::leaf(0, 0);
    internal.parent = parent;
    let id = tree.push_node(internal);
    let left = read_node(reader, tree, Some(id), depth + 1)?;
    let right = read_node(reader, tree, Some(id), depth + 1)?;

    let node = tree.node_mut(id);
    node.left = Some(left);
    node.right = Some(right);
    Ok(id)
}
