//! Contains [FrequencyTable], the per byte occurrence
//! counts that a Huffman tree is built from.

use crate::common::ALPHABET_SIZE;

/// How often each byte value occurs in an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// A table where every count is zero
    pub fn new() -> FrequencyTable {
        FrequencyTable {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Count every byte of `data`
    pub fn from_bytes(data: &[u8]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        table.update(data);
        table
    }

    /// Add the bytes of `data` to the counts
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
    }

    pub fn add(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] += count;
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of bytes counted
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of byte values that occur at least once
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// `(symbol, count)` for every symbol with a nonzero count, in ascending symbol order
    pub fn iter_used(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}
