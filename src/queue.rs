use std::cmp::Ordering;
use std::collections::BinaryHeap;

// keyed by frequency, then insertion sequence
struct HeapNode<T> {
    freq: u64,
    seq: u64,
    item: T,
}

impl<T> HeapNode<T> {
    fn key(&self) -> (u64, u64) {
        (self.freq, self.seq)
    }
}

impl<T> Ord for HeapNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for Min-Heap behavior in BinaryHeap (which is max-heap by default)
        other.key().cmp(&self.key())
    }
}

impl<T> PartialOrd for HeapNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Sequence numbers are unique, so key equality is identity.
impl<T> PartialEq for HeapNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for HeapNode<T> {}

/// Min-priority queue over frequencies; equal frequencies pop in push order.
pub struct MinQueue<T> {
    heap: BinaryHeap<HeapNode<T>>,
    next_seq: u64,
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinQueue<T> {
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, freq: u64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapNode { freq, seq, item });
    }

    pub fn pop(&mut self) -> Option<(u64, T)> {
        self.heap.pop().map(|n| (n.freq, n.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
