use hist::FreqTable;
use log::log_enabled;
use log::Level::Trace;
use log::*;

use crate::tree::tree_node::HuffNode;

/// symbol to bitstring pairs, in a stable order
pub type CodeTable = Vec<(u8, String)>;

/// Walks the tree and collects the branch path for every real symbol leaf,
/// "0" per left branch, "1" per right branch.
///
/// The placeholder leaf emits no entry. Entries come out in depth-first
/// traversal order.
pub fn extract_codes(root: &HuffNode) -> CodeTable {
    let mut table = CodeTable::new();
    collect(root, String::new(), &mut table);

    if log_enabled!(Trace) {
        for (symbol, code) in &table {
            trace!("{}: {}", symbol, code);
        }
    }
    table
}

fn collect(node: &HuffNode, path: String, table: &mut CodeTable) {
    match node {
        HuffNode::Leaf {
            symbol: Some(symbol),
            ..
        } => table.push((*symbol, path)),
        HuffNode::Leaf { symbol: None, .. } => {}
        HuffNode::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push('0');
            collect(left, left_path, table);

            let mut right_path = path;
            right_path.push('1');
            collect(right, right_path, table);
        }
    }
}

/// sum over all table entries of symbol count times code length, in bits
pub fn weighted_length(table: &CodeTable, counts: &FreqTable) -> usize {
    table
        .iter()
        .map(|(symbol, code)| counts.count(*symbol) as usize * code.len())
        .sum()
}

/// Will validate that no code in the table is a prefix of another code.
/// This validation is quadratic and meant for tests and fuzzing, not for a
/// regular execution.
pub fn assert_prefix_free(table: &[(u8, String)]) {
    for (i, (symbol_a, code_a)) in table.iter().enumerate() {
        for (symbol_b, code_b) in table.iter().skip(i + 1) {
            if code_a.starts_with(code_b.as_str()) || code_b.starts_with(code_a.as_str()) {
                panic!(
                    "invalid prefix detected between {} ({}) and {} ({})",
                    symbol_a, code_a, symbol_b, code_b
                );
            }
        }
    }
}
