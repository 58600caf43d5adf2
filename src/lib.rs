/*!
prefix_codes derives the two classical prefix-code assignments for the byte
distribution of an input: Huffman coding and Shannon-Fano coding.

Huffman builds its code bottom-up, greedily merging the two least frequent
nodes of a priority queue into a binary tree and reading each symbol's code
off the branch path. Shannon-Fano works top-down, recursively splitting the
probability-sorted symbol list into two cumulative-probability-balanced
halves, one bit per split.

Both pipelines start from the same frequency analysis and end in a
symbol-to-bitstring table. Nothing is encoded or packed, the product is the
code table itself.
*/

use hist::FreqTable;
use log::*;

pub use hist::count_simple;
pub use huffcode::CodeTable;

/// Huffman code table for the byte distribution of `input`.
///
/// Entries come out in tree-traversal order. Empty input yields an empty
/// table.
pub fn huffman_codes(input: &[u8]) -> CodeTable {
    let table = FreqTable::from_bytes(input);
    let tree = huffcode::build_tree(&table);
    let codes = huffcode::extract_codes(&tree);
    debug!(
        "huffman: {} codes, {} weighted bits",
        codes.len(),
        huffcode::weighted_length(&codes, &table)
    );
    codes
}

/// Shannon-Fano code table for the byte distribution of `input`.
///
/// Entries come out in count-descending order. Empty input yields an empty
/// table.
pub fn shannon_fano_codes(input: &[u8]) -> CodeTable {
    let table = FreqTable::from_bytes(input);
    if table.is_empty() {
        return CodeTable::new();
    }

    match shanfan::code_table(&table) {
        Ok(entries) => entries
            .into_iter()
            .map(|entry| (entry.symbol, entry.code))
            .collect(),
        // a non-empty byte input always has a positive total
        Err(err) => unreachable!("{}", err),
    }
}
