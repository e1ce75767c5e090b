use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use num_traits::Float;
use ordered_float::OrderedFloat;

/// Min-heap of (node, cost) entries for label-setting searches
///
/// Costs are wrapped in `OrderedFloat` so any `Float` label type can be
/// ordered. Stale entries are not removed; callers skip them on pop.
#[derive(Debug)]
pub struct NodeHeap<W>
where
    W: Float + Debug,
{
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> NodeHeap<W>
where
    W: Float + Debug,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        NodeHeap {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, node: usize, cost: W) {
        self.heap.push(Reverse((OrderedFloat(cost), node)));
    }

    /// Removes the entry with the smallest cost, ties broken by node index
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap.pop().map(|Reverse((cost, node))| (node, cost.into_inner()))
    }
}

impl<W> Default for NodeHeap<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        NodeHeap::new()
    }
}
