use std::collections::HashMap;

use bitvec::prelude::*;
use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::{FreqTable, Symbol};
use crate::tree::{HuffmanTree, Node, check_internal};

/// Owned bit sequence, packed most-significant bit first.
pub type Bits = BitVec<u8, Msb0>;
pub type BitStr = BitSlice<u8, Msb0>;

/// Renders bits as a string of `0`/`1` characters.
pub fn to_bit_string(bits: &BitStr) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Symbol to code mapping derived from one tree.
///
/// Codes are root-to-leaf paths, `0` for a left edge and `1` for a right one,
/// so no code is a prefix of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, Bits>,
    // leaves from left to right
    order: Vec<S>,
}

// Explicit stack of (node, prefix): deep trees never grow the call stack.
// A lone root leaf gets `0`, since an empty code cannot be decoded.
pub fn build_code_table<S: Symbol>(tree: &HuffmanTree<S>) -> Result<CodeTable<S>> {
    let mut codes = HashMap::new();
    let mut order = Vec::new();
    let mut stack: Vec<(&Node<S>, Bits)> = vec![(tree.root(), Bits::new())];

    while let Some((node, mut prefix)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                if prefix.is_empty() {
                    prefix.push(false);
                }
                trace!(
                    "Assigning code to {:?} : '{}'",
                    symbol,
                    to_bit_string(&prefix)
                );
                if codes.insert(symbol.clone(), prefix).is_some() {
                    return Err(HuffmanError::IncompleteTree(format!(
                        "symbol {:?} appears on more than one leaf",
                        symbol
                    )));
                }
                order.push(symbol.clone());
            }
            Node::Internal { freq, left, right } => {
                check_internal(*freq, left, right)?;

                let mut right_prefix = prefix.clone();
                right_prefix.push(true);
                prefix.push(false);

                stack.push((right.as_ref(), right_prefix));
                stack.push((left.as_ref(), prefix));
            }
        }
    }

    debug!("Code table built with {} entries.", codes.len());
    Ok(CodeTable { codes, order })
}

impl<S: Symbol> CodeTable<S> {
    pub fn from_tree(tree: &HuffmanTree<S>) -> Result<Self> {
        build_code_table(tree)
    }

    pub fn get(&self, symbol: &S) -> Option<&BitStr> {
        self.codes.get(symbol).map(|code| code.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitStr)> + '_ {
        self.order
            .iter()
            .map(move |s| (s, self.codes[s].as_bitslice()))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|c| c.len()).max().unwrap_or(0)
    }

    /// Number of bits needed to encode a sequence with the given counts,
    /// saturating at `u64::MAX`. Symbols the table has no code for are not
    /// counted.
    pub fn encoded_len(&self, freq: &FreqTable<S>) -> u64 {
        self.iter()
            .map(|(symbol, code)| freq.get(symbol).saturating_mul(code.len() as u64))
            .fold(0, u64::saturating_add)
    }

    /// Expected code length in bits per symbol under the given counts.
    pub fn average_code_len(&self, freq: &FreqTable<S>) -> f64 {
        let total = freq.total();
        if total == 0 {
            return 0.0;
        }
        self.encoded_len(freq) as f64 / total as f64
    }
}

impl<S: Symbol + Ord> CodeTable<S> {
    pub fn sorted_entries(&self) -> Vec<(&S, &BitStr)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
