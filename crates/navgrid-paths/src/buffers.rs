//! Reusable per-search state.
//!
//! The node arena is generation-tagged: bumping the generation at the start
//! of a search lazily invalidates every node, so no per-call clearing of
//! the arena is needed and repeated queries allocate nothing after warm-up.

use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

/// A cell's search state within one generation.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f32,
    pub(crate) f: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry ordered for a min-f pop with stable tie-breaking: lower f,
/// then lower h (closer to the goal), then lower cell index.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: OrderedFloat<f32>,
    pub(crate) h: OrderedFloat<f32>,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Arena of per-cell search nodes plus the open heap's backing storage.
pub(crate) struct SearchBuffers {
    pub(crate) nodes: Vec<Node>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) generation: u32,
}

impl SearchBuffers {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
            open: BinaryHeap::new(),
            generation: 0,
        }
    }

    /// Start a new search: all existing nodes become stale and any
    /// leftover heap entries are discarded, keeping the heap's capacity.
    pub(crate) fn begin_search(&mut self) -> u32 {
        self.open.clear();
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}
