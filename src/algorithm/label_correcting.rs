use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::paths::{trace_path, PathTrace};
use crate::algorithm::traits::SearchSettings;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult, ThruNodes};
use crate::data_structures::{Admission, ScanEligibleList};
use crate::graph::{is_traversable, Mode, NetworkView};
use crate::{Error, Result};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the scan-eligible list
    pub scans: usize,
    /// Links examined after passing the mode filter
    pub relaxations: usize,
    /// Strict label improvements
    pub improvements: usize,
    /// Improved nodes that re-entered the list at the front
    pub front_insertions: usize,
}

/// Label and scan-list storage for one search at a time
///
/// Allocate once and hand the same buffers to every call; each call resets
/// them before use. Buffers must not be shared between concurrent searches.
#[derive(Debug, Clone)]
pub struct SearchBuffers<W>
where
    W: Float + Zero + Debug + Copy,
{
    label_cost: Vec<W>,
    node_pred: Vec<Option<usize>>,
    link_pred: Vec<Option<usize>>,
    scan_list: ScanEligibleList,
    origin: Option<usize>,
    unreachable: W,
}

impl<W> SearchBuffers<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates buffers sized for `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        let unreachable = W::infinity();
        SearchBuffers {
            label_cost: vec![unreachable; node_count],
            node_pred: vec![None; node_count],
            link_pred: vec![None; node_count],
            scan_list: ScanEligibleList::new(node_count),
            origin: None,
            unreachable,
        }
    }

    /// Restores the initial state for a network of `node_count` nodes
    ///
    /// Only grows the allocations when the network is larger than before.
    fn reset(&mut self, node_count: usize, unreachable: W) {
        self.label_cost.clear();
        self.label_cost.resize(node_count, unreachable);
        self.node_pred.clear();
        self.node_pred.resize(node_count, None);
        self.link_pred.clear();
        self.link_pred.resize(node_count, None);
        self.scan_list.reset(node_count);
        self.origin = None;
        self.unreachable = unreachable;
    }

    /// Origin of the last completed search
    pub fn origin(&self) -> Option<usize> {
        self.origin
    }

    /// Raw label costs; unreached nodes hold the unreachable ceiling
    pub fn label_costs(&self) -> &[W] {
        &self.label_cost
    }

    pub fn node_predecessors(&self) -> &[Option<usize>] {
        &self.node_pred
    }

    pub fn link_predecessors(&self) -> &[Option<usize>] {
        &self.link_pred
    }

    pub fn scan_list(&self) -> &ScanEligibleList {
        &self.scan_list
    }

    /// Ceiling used for unreached nodes in the last search
    pub fn unreachable_cost(&self) -> W {
        self.unreachable
    }

    /// Label cost of `node`, `None` when it was not reached
    pub fn distance(&self, node: usize) -> Option<W> {
        let cost = *self.label_cost.get(node)?;
        if cost < self.unreachable || self.origin == Some(node) {
            Some(cost)
        } else {
            None
        }
    }

    /// Path from the last origin to `target`
    pub fn path_to(&self, target: usize) -> Option<PathTrace> {
        let origin = self.origin?;
        self.distance(target)?;
        trace_path(origin, target, &self.node_pred, &self.link_pred)
    }

    /// Copies the last search out into an owned result
    pub fn to_result(&self) -> Option<ShortestPathResult<W>> {
        let source = self.origin?;
        Some(ShortestPathResult {
            distances: (0..self.label_cost.len()).map(|n| self.distance(n)).collect(),
            predecessors: self.node_pred.clone(),
            link_predecessors: self.link_pred.clone(),
            source,
        })
    }
}

/// Label-correcting shortest path engine
///
/// Nodes awaiting a scan sit in a [`ScanEligibleList`]: a node whose label
/// improves after it was already scanned jumps to the front, a node reached
/// for the first time joins the back, and a waiting node keeps its place.
/// Link costs must be non-negative; a reachable negative cycle makes the
/// search run forever.
#[derive(Debug, Clone)]
pub struct LabelCorrecting<W> {
    settings: SearchSettings<W>,
}

impl<W> LabelCorrecting<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an engine searching all modes through every node from cost zero
    pub fn new() -> Self {
        LabelCorrecting {
            settings: SearchSettings::default(),
        }
    }

    /// Creates an engine from explicit settings
    pub fn with_settings(settings: SearchSettings<W>) -> Self {
        LabelCorrecting { settings }
    }

    /// Set the active travel mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.settings.mode = mode;
        self
    }

    /// Set which nodes may be passed through
    pub fn with_thru_nodes(mut self, thru_nodes: ThruNodes) -> Self {
        self.settings.thru_nodes = thru_nodes;
        self
    }

    /// Set the label given to the origin, e.g. a departure time
    pub fn with_start_cost(mut self, start_cost: W) -> Self {
        self.settings.start_cost = start_cost;
        self
    }

    /// Set the label kept by unreached nodes
    pub fn with_max_label_cost(mut self, max_label_cost: W) -> Self {
        self.settings.max_label_cost = max_label_cost;
        self
    }

    pub fn settings(&self) -> &SearchSettings<W> {
        &self.settings
    }

    /// Runs one search from `origin`, writing labels into `buffers`
    ///
    /// The buffers are reset first, so they can be reused across origins.
    pub fn run<N>(
        &self,
        network: &N,
        origin: usize,
        buffers: &mut SearchBuffers<W>,
    ) -> Result<SearchStats>
    where
        N: NetworkView<W>,
    {
        if !network.has_node(origin) {
            return Err(Error::SourceNotFound);
        }

        let SearchSettings { mode, thru_nodes, start_cost, max_label_cost } = &self.settings;
        buffers.reset(network.node_count(), *max_label_cost);
        buffers.label_cost[origin] = *start_cost;
        buffers.scan_list.push_back(origin);

        let mut stats = SearchStats::default();
        while let Some(current) = buffers.scan_list.pop_front() {
            stats.scans += 1;
            if !thru_nodes.is_expandable(current, origin) {
                continue;
            }

            let current_cost = buffers.label_cost[current];
            for &link in network.outgoing_links(current) {
                if !is_traversable(mode, network.allowed_uses(link)) {
                    continue;
                }
                stats.relaxations += 1;

                let next = network.to_node(link);
                let candidate = current_cost + network.cost(link);
                if candidate < buffers.label_cost[next] {
                    buffers.label_cost[next] = candidate;
                    buffers.node_pred[next] = Some(network.from_node(link));
                    buffers.link_pred[next] = Some(link);
                    stats.improvements += 1;
                    if buffers.scan_list.admit(next) == Admission::Front {
                        stats.front_insertions += 1;
                    }
                }
            }
        }

        buffers.origin = Some(origin);
        log::debug!(
            "origin {} ({}): {} scans, {} relaxations, {} improvements, {} front insertions",
            origin,
            mode,
            stats.scans,
            stats.relaxations,
            stats.improvements,
            stats.front_insertions
        );
        Ok(stats)
    }
}

impl<W> Default for LabelCorrecting<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        LabelCorrecting::new()
    }
}

impl<W, N> ShortestPathAlgorithm<W, N> for LabelCorrecting<W>
where
    W: Float + Zero + Debug + Copy,
    N: NetworkView<W>,
{
    fn name(&self) -> &'static str {
        "LabelCorrecting"
    }

    fn compute_shortest_paths(&self, network: &N, source: usize) -> Result<ShortestPathResult<W>> {
        let mut buffers = SearchBuffers::new(network.node_count());
        self.run(network, source, &mut buffers)?;
        buffers.to_result().ok_or(Error::SourceNotFound)
    }
}
