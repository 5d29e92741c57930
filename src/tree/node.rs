/// Index of a [Node] inside the arena of its [super::HuffmanTree].
///
/// Ids are handed out in insertion order, which the tree builder relies on
/// to break ties between nodes of equal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// One vertex of a Huffman tree.
///
/// `left` and `right` are the children this node owns, `parent` is a plain back
/// reference that is only followed when deriving a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Sum of the frequencies of every symbol below this node. Zero for trees read from a header.
    pub weight: u64,
    /// Only meaningful on leaves
    pub symbol: u8,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn leaf(weight: u64, symbol: u8) -> Node {
        Node {
            weight,
            symbol,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn internal(weight: u64, left: NodeId, right: NodeId) -> Node {
        Node {
            weight,
            symbol: 0,
            left: Some(left),
            right: Some(right),
            parent: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
