use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::error::{HuffmanError, Result};
use crate::frequency::{FreqTable, Symbol};
use crate::queue::MinQueue;

/// A node of the Huffman tree.
///
/// Internal nodes always own exactly two children, so a node with a single
/// child cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn leaf(symbol: S, freq: u64) -> Self {
        Node::Leaf { symbol, freq }
    }

    /// Joins two subtrees under a parent carrying their combined frequency.
    /// The sum saturates at `u64::MAX`; [`HuffmanTree::from_root`] rejects a
    /// saturated parent as [`HuffmanError::WeightOverflow`].
    pub fn internal(left: Node<S>, right: Node<S>) -> Self {
        Node::Internal {
            freq: left.freq().saturating_add(right.freq()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Checks the frequency invariant of one internal node.
pub(crate) fn check_internal<S>(freq: u64, left: &Node<S>, right: &Node<S>) -> Result<()> {
    let sum = left
        .freq()
        .checked_add(right.freq())
        .ok_or(HuffmanError::WeightOverflow)?;
    if sum != freq {
        return Err(HuffmanError::IncompleteTree(format!(
            "internal node has frequency {} but its children sum to {}",
            freq, sum
        )));
    }
    Ok(())
}

fn validate<S: Symbol>(root: &Node<S>) -> Result<()> {
    let mut seen = HashSet::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                if !seen.insert(symbol) {
                    return Err(HuffmanError::IncompleteTree(format!(
                        "symbol {:?} appears on more than one leaf",
                        symbol
                    )));
                }
            }
            Node::Internal { freq, left, right } => {
                check_internal(*freq, left, right)?;
                stack.push(right);
                stack.push(left);
            }
        }
    }
    Ok(())
}

/// A finished, immutable Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Adopts a tree assembled elsewhere, typically rebuilt by a caller from a
    /// transmitted form. Every internal frequency must equal the sum of its
    /// children and no symbol may sit on two leaves.
    pub fn from_root(root: Node<S>) -> Result<Self> {
        validate(&root)?;
        Ok(HuffmanTree { root })
    }

    /// Wraps a root without validating it.
    #[cfg(test)]
    pub(crate) fn unchecked(root: Node<S>) -> Self {
        HuffmanTree { root }
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn into_root(self) -> Node<S> {
        self.root
    }

    pub fn total_freq(&self) -> u64 {
        self.root.freq()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        count
    }

    /// Number of edges on the longest root-to-leaf path. A single-leaf tree
    /// has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }
}

/// Builds the Huffman tree for `frequencies`.
///
/// Leaves enter the queue in first-occurrence order, so equal frequencies
/// always merge the same way and the resulting shape depends only on the
/// counted sequence. The two nodes taken out of the queue become the left and
/// right child, in extraction order.
pub fn build_huffman_tree<S: Symbol>(frequencies: &FreqTable<S>) -> Result<HuffmanTree<S>> {
    debug!(
        "Building Huffman Tree from {} unique symbols",
        frequencies.len()
    );

    if frequencies.is_empty() {
        return Err(HuffmanError::EmptyAlphabet);
    }
    if frequencies.len() == 1 {
        warn!("Single-symbol alphabet; its code will be a lone 0 bit");
    }

    let mut queue = MinQueue::with_capacity(frequencies.len());
    for (symbol, freq) in frequencies.iter() {
        queue.push(freq, Node::leaf(symbol.clone(), freq));
    }
    debug!("Initial queue size: {}", queue.len());

    loop {
        let Some((_, left)) = queue.pop() else {
            return Err(HuffmanError::EmptyAlphabet);
        };
        let Some((_, right)) = queue.pop() else {
            debug!("Tree construction complete.");
            return Ok(HuffmanTree { root: left });
        };

        // Bounded by the table total, which was checked on the way in.
        let freq = left
            .freq()
            .checked_add(right.freq())
            .ok_or(HuffmanError::WeightOverflow)?;
        trace!("Merged nodes into parent with frequency {}", freq);
        queue.push(
            freq,
            Node::Internal {
                freq,
                left: Box::new(left),
                right: Box::new(right),
            },
        );
    }
}
