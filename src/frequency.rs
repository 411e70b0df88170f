use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};

/// Anything that can be counted and coded: `char` for text, `u8` for bytes.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}

/// Occurrence counts per distinct symbol.
///
/// Besides the counts the table keeps the order in which symbols were first
/// seen. Lookups go through the hash map; anything that needs a stable order
/// (the tree builder, reports) walks `order` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable<S: Symbol> {
    counts: HashMap<S, u64>,
    order: Vec<S>,
    // every count, and every sum of counts, is bounded by this
    total: u64,
}

impl<S: Symbol> Default for FreqTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FreqTable<S> {
    pub fn new() -> Self {
        FreqTable {
            counts: HashMap::new(),
            order: Vec::new(),
            total: 0,
        }
    }

    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self::new();
        for symbol in symbols {
            // One per item: the total can never pass the number of items seen.
            table.total += 1;
            table.bump(symbol, 1);
        }
        debug!(
            "Counted {} symbols, {} distinct",
            table.total(),
            table.len()
        );
        table
    }

    /// Builds a table from explicit weights. Zero weights are dropped so every
    /// key present has a count of at least one; repeated symbols accumulate.
    /// Fails with [`HuffmanError::WeightOverflow`] when the weights sum past
    /// `u64::MAX`.
    pub fn from_weights<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut table = Self::new();
        for (symbol, weight) in weights {
            if weight == 0 {
                trace!("Skipping zero weight for {:?}", symbol);
                continue;
            }
            table.total = table
                .total
                .checked_add(weight)
                .ok_or(HuffmanError::WeightOverflow)?;
            table.bump(symbol, weight);
        }
        Ok(table)
    }

    // Callers raise `total` first; a count never exceeds it.
    fn bump(&mut self, symbol: S, weight: u64) {
        match self.counts.entry(symbol) {
            Entry::Occupied(mut slot) => *slot.get_mut() += weight,
            Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(weight);
            }
        }
    }

    /// Key-wise sum with another partial table, e.g. one counted over a
    /// different shard of the input. Symbols new to `self` keep `other`'s
    /// first-occurrence order after the existing ones. On
    /// [`HuffmanError::WeightOverflow`] `self` is left untouched.
    pub fn merge(&mut self, other: &FreqTable<S>) -> Result<()> {
        self.total = self
            .total
            .checked_add(other.total)
            .ok_or(HuffmanError::WeightOverflow)?;
        for (symbol, count) in other.iter() {
            self.bump(symbol.clone(), count);
        }
        Ok(())
    }

    pub fn get(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Symbols with their counts, in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.order.iter().map(move |s| (s, self.counts[s]))
    }
}

/// Shannon entropy of the table in bits per symbol.
pub fn entropy_from_freq<S: Symbol>(freq: &FreqTable<S>) -> f64 {
    let total = freq.total();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    let entropy: f64 = freq
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total
    );
    entropy.max(0.0)
}
