//! # huffman
//!
//! Huffman coding over in-memory symbol sequences: count frequencies, build an
//! optimal prefix-free code, encode to a bit sequence and decode it back.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffman::{build_code, decode_to_string, encode_str};
//!
//! let text = "hello world";
//! let (tree, table) = build_code(text.chars())?;
//! let bits = encode_str(text, &table)?;
//! assert!(bits.len() < text.len() * 8);
//! assert_eq!(decode_to_string(&bits, &tree)?, text);
//! # Ok::<(), huffman::HuffmanError>(())
//! ```
//!
//! Symbols are generic: anything `Eq + Hash + Clone + Debug` works, so the
//! same code paths handle `char` text and raw `u8` data.
//!
//! Tree shape is reproducible. Leaves enter the priority queue in the order
//! their symbols first occur in the input and ties on frequency are broken by
//! insertion order, so identical input always yields an identical code.
//!
//! Moving a tree or bit sequence between processes is left to the caller: a
//! deserialized tree re-enters through [`HuffmanTree::from_root`], and a
//! [`Bits`] value can be packed with `BitVec::into_vec` as long as its bit
//! length travels with it.

pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod queue;
pub mod tree;

pub use codes::{BitStr, Bits, CodeTable, build_code_table, to_bit_string};
pub use decoder::{decode, decode_to_string};
pub use encoder::{encode, encode_str};
pub use error::{HuffmanError, Result};
pub use frequency::{FreqTable, Symbol, entropy_from_freq};
pub use tree::{HuffmanTree, Node, build_huffman_tree};

use log::debug;

/// Counts `symbols`, builds their Huffman tree and derives the code table.
///
/// Fails with [`HuffmanError::EmptyAlphabet`] when `symbols` is empty.
pub fn build_code<S, I>(symbols: I) -> Result<(HuffmanTree<S>, CodeTable<S>)>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let freq = FreqTable::from_symbols(symbols);
    let tree = build_huffman_tree(&freq)?;
    let table = build_code_table(&tree)?;
    debug!(
        "Built code for {} symbols, tree depth {}",
        table.len(),
        tree.depth()
    );
    Ok((tree, table))
}
