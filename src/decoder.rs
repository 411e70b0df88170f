use log::{debug, trace};

use crate::codes::BitStr;
use crate::error::{HuffmanError, Result};
use crate::frequency::Symbol;
use crate::tree::{HuffmanTree, Node};

/// Decodes `bits` by walking `tree` from the root.
///
/// A `0` bit moves to the left child and a `1` bit to the right one. Reaching
/// a leaf emits its symbol and returns to the root. The sequence must end
/// exactly on a symbol boundary, otherwise the dangling fragment is reported
/// as [`HuffmanError::TruncatedEncoding`].
///
/// A tree made of a single leaf reads every `0` bit as one occurrence of its
/// symbol; a `1` bit has nowhere to go and fails with
/// [`HuffmanError::UnassignedCode`].
pub fn decode<S: Symbol>(bits: &BitStr, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    debug!("Starting bitstream decoding of {} bits...", bits.len());
    let (root_left, root_right) = match tree.root() {
        Node::Leaf { symbol, .. } => {
            if let Some(position) = bits.first_one() {
                return Err(HuffmanError::UnassignedCode { position });
            }
            return Ok(vec![symbol.clone(); bits.len()]);
        }
        Node::Internal { left, right, .. } => (left.as_ref(), right.as_ref()),
    };

    let mut result = Vec::new();
    // children of the internal node the pointer rests on
    let mut branches = (root_left, root_right);
    let mut pending = 0usize;

    for bit in bits.iter().by_vals() {
        let next = if bit { branches.1 } else { branches.0 };
        pending += 1;

        match next {
            Node::Leaf { symbol, .. } => {
                trace!("Decoded {:?} from {} bits", symbol, pending);
                result.push(symbol.clone());
                branches = (root_left, root_right);
                pending = 0;
            }
            Node::Internal { left, right, .. } => branches = (left.as_ref(), right.as_ref()),
        }
    }

    if pending != 0 {
        return Err(HuffmanError::TruncatedEncoding {
            decoded: result.len(),
            dangling_bits: pending,
        });
    }

    debug!("Final decoded data size: {} symbols.", result.len());
    Ok(result)
}

/// Decodes a bit sequence produced from text back into a `String`.
pub fn decode_to_string(bits: &BitStr, tree: &HuffmanTree<char>) -> Result<String> {
    Ok(decode(bits, tree)?.into_iter().collect())
}
