use std::collections::BinaryHeap;

use hist::FreqTable;
use log::*;

use crate::tree::tree_node::HuffNode;

/// Builds the Huffman merge tree for a frequency table.
///
/// Every distinct symbol becomes a leaf. The queue is additionally seeded
/// with one zero-count placeholder leaf: a single-symbol alphabet still goes
/// through one merge, so no symbol ends up with a zero-length code. An empty
/// table returns the bare placeholder leaf, which carries no extractable
/// code.
///
/// The first node popped becomes the left child, the second the right one.
#[inline]
pub fn build_tree(table: &FreqTable) -> HuffNode {
    let mut heap = BinaryHeap::with_capacity(table.num_symbols() + 1);
    for (symbol, count) in table.iter() {
        heap.push(HuffNode::Leaf {
            symbol: Some(symbol),
            count,
        });
    }
    heap.push(HuffNode::Leaf {
        symbol: None,
        count: 0,
    });

    debug!("{} nodes queued for merging", heap.len());

    loop {
        match (heap.pop(), heap.pop()) {
            (Some(node1), Some(node2)) => {
                heap.push(HuffNode::Internal {
                    count: node1.count() + node2.count(),
                    left: Box::new(node1),
                    right: Box::new(node2),
                });
            }
            (Some(root), None) => return root,
            (None, _) => unreachable!("queue is seeded with the placeholder leaf"),
        }
    }
}
