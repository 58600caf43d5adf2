use core::cmp::Ordering;

/// One node of the Huffman merge tree.
///
/// Children are owned exclusively, the tree is strictly binary and shares
/// nothing. `symbol: None` marks the placeholder leaf the queue is seeded
/// with (see [`build_tree`](crate::tree::build_tree::build_tree)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: Option<u8>,
        count: u32,
    },
    Internal {
        count: u32,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn count(&self) -> u32 {
        match self {
            HuffNode::Leaf { count, .. } => *count,
            HuffNode::Internal { count, .. } => *count,
        }
    }
}

impl PartialOrd for HuffNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`. The ordering is flipped on counts so
// the queue becomes a min-heap instead of a max-heap. Ties are left to the
// heap's pop order, the merge result is a valid prefix tree either way.
impl Ord for HuffNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.count().cmp(&self.count())
    }
}
