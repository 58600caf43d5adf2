/*!
huffcode builds Huffman code tables: a bottom-up greedy merge of the two
least frequent nodes at a time, driven by a min-priority-queue, followed by a
depth-first walk that reads off each symbol's branch path as its code.

The merge queue is always seeded with one zero-count placeholder leaf, so a
one-symbol alphabet still gets a 1-bit code instead of an empty one. The
resulting tree can differ from textbook Huffman, the codes stay prefix-free
either way.
*/

pub mod codes;
pub mod tree;

pub use crate::codes::assert_prefix_free;
pub use crate::codes::extract_codes;
pub use crate::codes::weighted_length;
pub use crate::codes::CodeTable;
pub use crate::tree::build_tree;
pub use crate::tree::HuffNode;
pub use crate::tree::render_tree::TreeGraph;

#[cfg(test)]
mod tests {
    use crate::tree::minimum_tree_depth;
    use crate::*;
    use hist::FreqTable;

    fn codes_for(input: &[u8]) -> CodeTable {
        let table = FreqTable::from_bytes(input);
        let tree = build_tree(&table);
        extract_codes(&tree)
    }

    fn validate(input: &[u8]) -> CodeTable {
        let table = FreqTable::from_bytes(input);
        let tree = build_tree(&table);
        assert_eq!(tree.count() as usize, input.len());

        let codes = extract_codes(&tree);
        // every distinct symbol gets exactly one code
        assert_eq!(codes.len(), table.num_symbols());
        assert_prefix_free(&codes);

        let max_len = codes.iter().map(|(_, code)| code.len()).max().unwrap_or(0);
        assert!(max_len >= minimum_tree_depth(table.num_symbols()));
        codes
    }

    fn code_len(codes: &CodeTable, symbol: u8) -> usize {
        codes
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code.len())
            .unwrap()
    }

    #[test]
    fn test_aaabbc_code_lengths() {
        let codes = validate(b"aaabbc");
        assert_eq!(code_len(&codes, b'a'), 1);
        assert_eq!(code_len(&codes, b'b'), 2);
        assert_eq!(code_len(&codes, b'c'), 3);

        let table = FreqTable::from_bytes(b"aaabbc");
        assert_eq!(weighted_length(&codes, &table), 10);
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let codes = validate(b"aaaa");
        assert_eq!(codes, vec![(b'a', "1".to_string())]);
    }

    #[test]
    fn test_empty_input() {
        assert!(codes_for(b"").is_empty());
    }

    #[test]
    fn simple_balanced() {
        validate(&[1, 2, 3, 4]);
    }

    #[test]
    fn balanced_tree_distribution() {
        let all_bytes = (0..=u8::MAX).collect::<Vec<u8>>();
        validate(&all_bytes);
    }

    // input is the number of repeats per symbol
    fn gen_fibo_distribution(fibo_counts: &[u64]) -> Vec<u8> {
        use std::io::Read;
        let mut all_bytes = Vec::new();

        for (num, repeat) in fibo_counts.iter().enumerate() {
            std::io::repeat(num as u8)
                .take(*repeat)
                .read_to_end(&mut all_bytes)
                .unwrap();
        }
        all_bytes
    }

    #[test]
    fn long_tree_distribution() {
        // fibonacci counts force the most lopsided merge order
        validate(&gen_fibo_distribution(&[1_u64, 1, 2, 3]));
        validate(&gen_fibo_distribution(&[1_u64, 1, 2, 3, 5]));
        validate(&gen_fibo_distribution(&[1_u64, 1, 2, 3, 5, 8]));
        validate(&gen_fibo_distribution(&[1_u64, 1, 2, 3, 5, 8, 13]));
        validate(&gen_fibo_distribution(&[1_u64, 1, 2, 3, 5, 8, 13, 21]));
    }

    #[test]
    fn test_idempotent_tables() {
        let data = b"rerunning the whole pipeline yields identical tables";
        assert_eq!(codes_for(data), codes_for(data));
    }

    #[test]
    fn test_lorem_4k() {
        const TEST_DATA: &[u8] = include_bytes!("../../test_data/lorem_4k.txt");
        let codes = validate(TEST_DATA);

        let table = FreqTable::from_bytes(TEST_DATA);
        println!(
            "estimated compressed size: {} bytes, ratio {:.3}",
            (weighted_length(&codes, &table) + 7) / 8,
            weighted_length(&codes, &table) as f32 / 8.0 / TEST_DATA.len() as f32
        );
    }

    #[test]
    fn test_v4_uuids_2k() {
        const TEST_DATA: &[u8] = include_bytes!("../../test_data/v4_uuids_2k.txt");
        validate(TEST_DATA);
    }
}
