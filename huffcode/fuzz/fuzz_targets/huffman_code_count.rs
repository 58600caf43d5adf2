#![no_main]

use hist::FreqTable;
use huffcode::build_tree;
use huffcode::extract_codes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let table = FreqTable::from_bytes(data);
    let tree = build_tree(&table);
    let codes = extract_codes(&tree);
    // one code per distinct symbol, none for the placeholder
    assert_eq!(codes.len(), table.num_symbols());
});
