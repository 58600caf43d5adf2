extern crate criterion;

use self::criterion::*;
use hist::FreqTable;
use huffcode::build_tree;
use huffcode::extract_codes;

const LOREM4K: &[u8] = include_bytes!("../../test_data/lorem_4k.txt");
const UUIDS2K: &[u8] = include_bytes!("../../test_data/v4_uuids_2k.txt");

const ALL: &[&[u8]] = &[LOREM4K as &[u8], UUIDS2K as &[u8]];

fn huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    for input in ALL.iter() {
        let input_bytes = input.len() as u64;
        group.throughput(Throughput::Bytes(input_bytes));
        group.bench_with_input(
            BenchmarkId::new("build_tree", input_bytes),
            &input,
            |b, i| {
                let table = FreqTable::from_bytes(i);
                b.iter(|| build_tree(&table));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("build_tree_complete", input_bytes),
            &input,
            |b, i| {
                b.iter(|| {
                    let table = FreqTable::from_bytes(i);
                    let tree = build_tree(&table);
                    extract_codes(&tree)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, huffman);
criterion_main!(benches);
