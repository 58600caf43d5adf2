use log::log_enabled;
use log::Level::Trace;
use log::*;

pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;

pub type CountsTable = [u32; MAX_SYMBOL_VALUE as usize + 1];

/// creates a table with the counts of each symbol
#[inline]
pub fn count_simple(input: &[u8]) -> CountsTable {
    let mut counts = [0_u32; 256];

    for byte in input {
        counts[*byte as usize] += 1
    }
    counts
}

/// Symbol counts of one input, iterable in first-occurrence order.
///
/// The counts alone would be enough to build the code tables, but keeping the
/// first-occurrence order makes every downstream table deterministic for a
/// given input, including tie cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: CountsTable,
    order: Vec<u8>,
    total: usize,
}

impl FreqTable {
    pub fn from_bytes(input: &[u8]) -> FreqTable {
        let mut counts = [0_u32; 256];
        let mut order = Vec::new();

        for byte in input {
            if counts[*byte as usize] == 0 {
                order.push(*byte);
            }
            counts[*byte as usize] += 1;
        }

        let table = FreqTable {
            counts,
            order,
            total: input.len(),
        };

        debug!(
            "counted {} distinct symbols, {} bytes total",
            table.num_symbols(),
            table.total()
        );
        if log_enabled!(Trace) {
            for (symbol, count) in table.iter() {
                trace!("{}: {}", symbol, count);
            }
        }

        table
    }

    pub fn count(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    pub fn counts(&self) -> &CountsTable {
        &self.counts
    }

    /// sum of all counts, equals the input length
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn num_symbols(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// iterates `(symbol, count)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.order
            .iter()
            .map(move |&symbol| (symbol, self.counts[symbol as usize]))
    }
}
