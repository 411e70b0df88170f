//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for building, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// No symbols to build a tree from.
    #[error("empty alphabet: cannot build a Huffman tree from no symbols")]
    EmptyAlphabet,

    /// Caller-supplied weights add up to more than a `u64` can hold.
    #[error("weight overflow: total frequency exceeds u64::MAX")]
    WeightOverflow,

    /// The tree breaks a structural invariant. This is a builder defect or a
    /// corrupt externally supplied tree, never a consequence of normal input.
    #[error("incomplete tree: {0}")]
    IncompleteTree(String),

    /// A symbol in the input has no entry in the code table.
    #[error("unknown symbol {symbol} at position {position}")]
    UnknownSymbol {
        /// Index of the offending symbol in the input sequence.
        position: usize,
        /// Debug rendering of the symbol.
        symbol: String,
    },

    /// The bit sequence ended in the middle of a code.
    #[error("truncated encoding: {dangling_bits} dangling bit(s) after {decoded} decoded symbol(s)")]
    TruncatedEncoding {
        /// Symbols decoded before the dangling fragment.
        decoded: usize,
        /// Bits consumed since the last complete symbol.
        dangling_bits: usize,
    },

    /// A bit selects a branch the tree does not have (a `1` under a
    /// single-symbol tree).
    #[error("bit {position} does not lead to any symbol")]
    UnassignedCode {
        /// Index of the offending bit.
        position: usize,
    },
}

impl HuffmanError {
    /// True for invariant violations inside the codec itself, as opposed to
    /// failures caused by caller input.
    pub fn is_internal(&self) -> bool {
        matches!(self, HuffmanError::IncompleteTree(_))
    }
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
