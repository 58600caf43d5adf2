/*!
shanfan builds Shannon-Fano code tables: entries are sorted by probability
descending and recursively split into two halves of balanced cumulative
probability, top-down. Each split contributes one bit, "0" for the left half
and "1" for the right half.

Probabilities are carried as exact occurrence counts and every comparison is
integer arithmetic, so a given input partitions identically on every run with
no floating-point drift at the split boundary.
*/

mod error;

use hist::FreqTable;
use log::*;

pub use error::ShanFanError;

/// One symbol with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub symbol: u8,
    pub count: u64,
}

/// Result of the top-down balanced splitting, consumed once by
/// [`assign_codes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partition {
    Leaf(Entry),
    Split(Box<Partition>, Box<Partition>),
}

/// Final code assignment for one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: u8,
    pub count: u64,
    pub code: String,
}

/// entries in the table's first-occurrence order
pub fn entries_from_table(table: &FreqTable) -> Vec<Entry> {
    table
        .iter()
        .map(|(symbol, count)| Entry {
            symbol,
            count: count as u64,
        })
        .collect()
}

/// Recursively partitions the entries into cumulative-count-balanced halves.
///
/// Entries are stable-sorted by count descending once up front, ties keep
/// their input order. Recursion splits after the first position where twice
/// the running sum reaches the group total, so both halves are always
/// non-empty and two entries always split 1-and-1.
pub fn build_partition(mut entries: Vec<Entry>) -> Result<Partition, ShanFanError> {
    if entries.is_empty() {
        return Err(ShanFanError::EmptyInput);
    }
    let total: u64 = entries.iter().map(|entry| entry.count).sum();
    if total == 0 {
        return Err(ShanFanError::ZeroTotal);
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    debug!("partitioning {} entries, total count {}", entries.len(), total);

    Ok(split(entries))
}

fn split(mut entries: Vec<Entry>) -> Partition {
    if entries.len() == 1 {
        return Partition::Leaf(entries.remove(0));
    }

    let total: u64 = entries.iter().map(|entry| entry.count).sum();
    let mut running = 0_u64;
    let mut split_at = entries.len() - 1;
    for (i, entry) in entries.iter().enumerate().take(entries.len() - 1) {
        running += entry.count;
        if 2 * running >= total {
            split_at = i + 1;
            break;
        }
    }

    let right = entries.split_off(split_at);
    Partition::Split(Box::new(split(entries)), Box::new(split(right)))
}

/// Walks the partition, materializing the accumulated branch labels.
///
/// A bare leaf keeps its prefix as the final code, splits recurse with "0"
/// appended on the left and "1" on the right. Entries come out in the
/// partition's left-to-right order, which is count-descending.
pub fn assign_codes(partition: Partition) -> Vec<CodeEntry> {
    let mut out = Vec::new();
    walk(partition, String::new(), &mut out);
    out
}

fn walk(partition: Partition, prefix: String, out: &mut Vec<CodeEntry>) {
    match partition {
        Partition::Leaf(entry) => out.push(CodeEntry {
            symbol: entry.symbol,
            count: entry.count,
            code: prefix,
        }),
        Partition::Split(left, right) => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            walk(*left, left_prefix, out);

            let mut right_prefix = prefix;
            right_prefix.push('1');
            walk(*right, right_prefix, out);
        }
    }
}

/// builds the full code table for a frequency table in one go
pub fn code_table(table: &FreqTable) -> Result<Vec<CodeEntry>, ShanFanError> {
    let partition = build_partition(entries_from_table(table))?;
    Ok(assign_codes(partition))
}
