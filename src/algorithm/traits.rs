use std::fmt::Debug;
use num_traits::{Float, NumCast, Zero};

use crate::algorithm::paths::trace_path;
use crate::algorithm::thru_nodes::ThruNodes;
use crate::graph::{Mode, NetworkView};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Label cost of each node, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor node in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Link used to enter each node in the shortest path tree
    pub link_predecessors: Vec<Option<usize>>,

    /// Origin node ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns true if `node` was reached from the source
    pub fn is_reachable(&self, node: usize) -> bool {
        self.distances.get(node).map_or(false, Option::is_some)
    }

    /// Node sequence from the source to `target`
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        trace_path(self.source, target, &self.predecessors, &self.link_predecessors)
            .map(|p| p.nodes)
    }

    /// Link sequence from the source to `target`; empty when `target` is the source
    pub fn link_path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        trace_path(self.source, target, &self.predecessors, &self.link_predecessors)
            .map(|p| p.links)
    }
}

/// Parameters shared by every search over a network
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings<W> {
    /// Active travel mode
    pub mode: Mode,
    /// Nodes allowed as intermediate hops
    pub thru_nodes: ThruNodes,
    /// Label of the origin, e.g. a departure time
    pub start_cost: W,
    /// Label of nodes that were never reached
    pub max_label_cost: W,
}

impl<W> Default for SearchSettings<W>
where
    W: Float,
{
    fn default() -> Self {
        SearchSettings {
            mode: Mode::All,
            thru_nodes: ThruNodes::All,
            start_cost: W::zero(),
            max_label_cost: <W as NumCast>::from(i32::MAX).unwrap_or_else(W::max_value),
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, N>
where
    W: Float + Zero + Debug + Copy,
    N: NetworkView<W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, network: &N, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }

    /// Get the shortest path from source to target as a sequence of links
    fn get_link_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.link_path_to(target)
    }
}
