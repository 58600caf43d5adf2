#![no_main]

use hist::FreqTable;
use huffcode::assert_prefix_free;
use huffcode::build_tree;
use huffcode::extract_codes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() == 0 {
        return;
    }
    let table = FreqTable::from_bytes(data);
    let tree = build_tree(&table);
    assert_prefix_free(&extract_codes(&tree));
});
