use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::mode::AllowedUses;

/// Read-only forward-star view of a directed network
///
/// Nodes and links are dense indices. The outgoing links of a node occupy a
/// contiguous slice of a shared link-order array; every entry of that slice
/// is an index into the per-link attribute arrays.
pub trait NetworkView<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the network
    fn node_count(&self) -> usize;

    /// Returns the number of links in the network
    fn link_count(&self) -> usize;

    /// Returns the link indices leaving `node`, in scan order
    fn outgoing_links(&self, node: usize) -> &[usize];

    /// Tail node of a link
    fn from_node(&self, link: usize) -> usize;

    /// Head node of a link
    fn to_node(&self, link: usize) -> usize;

    /// Traversal cost of a link
    fn cost(&self, link: usize) -> W;

    /// Modes permitted on a link
    fn allowed_uses(&self, link: usize) -> &AllowedUses;

    /// Returns true if the node index exists in the network
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }
}
