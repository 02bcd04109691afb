//! Frequency analysis over a symbol stream.
//!
//! ## Overview
//!
//! The analyzer tallies occurrences from a [`SymbolSource`] and produces
//! the sorted leaf list the tree builder consumes: ascending by
//! probability, equal probabilities ordered by symbol value so the whole
//! pipeline is reproducible run to run. A source with exactly one
//! distinct symbol gains a phantom zero-probability entry, guaranteeing
//! the tree always has at least two leaves and no codeword is empty.

use std::cmp::Ordering;

use amdusias_core::traits::SymbolSource;
use amdusias_core::types::{Symbol, SymbolFrequency, ALPHABET_SIZE};
use amdusias_core::Result;

/// Occurrence counts for one analyzed source.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
    total: u64,
}

impl FrequencyTable {
    /// Tally every symbol from a source until exhaustion.
    pub fn from_source<S: SymbolSource>(source: &mut S) -> Result<Self> {
        let mut counts = [0u64; ALPHABET_SIZE];
        let mut total = 0u64;
        while let Some(symbol) = source.next_symbol()? {
            counts[symbol.index()] += 1;
            total += 1;
        }
        Ok(FrequencyTable { counts, total })
    }

    /// Occurrence count for one symbol.
    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts[symbol.index()]
    }

    /// Total symbols tallied.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols seen.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Produce the sorted frequency list for tree construction.
    ///
    /// One entry per symbol with a non-zero count, `probability =
    /// count / total`, sorted ascending by probability with symbol value
    /// breaking ties. A single-distinct-symbol table gains the phantom
    /// entry; an empty table produces an empty list.
    pub fn sorted_frequencies(&self) -> Vec<SymbolFrequency> {
        let mut entries: Vec<SymbolFrequency> = (0..=Symbol::MAX)
            .filter_map(Symbol::new)
            .filter(|symbol| self.counts[symbol.index()] > 0)
            .map(|symbol| {
                let probability = self.counts[symbol.index()] as f64 / self.total as f64;
                SymbolFrequency::leaf(symbol, probability)
            })
            .collect();

        if let [only] = entries.as_slice() {
            if let Some(symbol) = only.symbol {
                entries.push(SymbolFrequency::leaf(symbol.successor(), 0.0));
            }
        }

        entries.sort_by(|a, b| {
            a.probability
                .partial_cmp(&b.probability)
                .unwrap_or(Ordering::Equal)
                .then(a.symbol.cmp(&b.symbol))
        });
        entries
    }
}

// =============================================================================
// Tests
// =============================================================================
