use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::label_correcting::{LabelCorrecting, SearchBuffers, SearchStats};
use crate::graph::NetworkView;
use crate::Result;

/// Origin-by-node cost matrix filled one origin at a time
///
/// All origins run through the same [`SearchBuffers`], which is the usage
/// pattern the engine is built for.
#[derive(Debug, Clone)]
pub struct CostSkim<W> {
    origins: Vec<usize>,
    node_count: usize,
    costs: Vec<W>,
    unreachable: W,
    stats: SearchStats,
}

impl<W> CostSkim<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Runs `engine` from every origin in turn
    pub fn compute<N>(
        engine: &LabelCorrecting<W>,
        network: &N,
        origins: &[usize],
        buffers: &mut SearchBuffers<W>,
    ) -> Result<Self>
    where
        N: NetworkView<W>,
    {
        let node_count = network.node_count();
        let mut costs = Vec::with_capacity(origins.len() * node_count);
        let mut stats = SearchStats::default();

        for &origin in origins {
            let run = engine.run(network, origin, buffers)?;
            stats.scans += run.scans;
            stats.relaxations += run.relaxations;
            stats.improvements += run.improvements;
            stats.front_insertions += run.front_insertions;
            costs.extend_from_slice(buffers.label_costs());
        }

        log::debug!(
            "skimmed {} origins over {} nodes ({} scans in total)",
            origins.len(),
            node_count,
            stats.scans
        );

        Ok(CostSkim {
            origins: origins.to_vec(),
            node_count,
            costs,
            unreachable: engine.settings().max_label_cost,
            stats,
        })
    }

    pub fn origins(&self) -> &[usize] {
        &self.origins
    }

    /// Raw labels of the `row`-th origin, `None` past the last origin
    pub fn row(&self, row: usize) -> Option<&[W]> {
        if row >= self.origins.len() {
            return None;
        }
        self.costs.get(row * self.node_count..(row + 1) * self.node_count)
    }

    /// Cost from the `row`-th origin to `node`, `None` when unreachable
    pub fn cost(&self, row: usize, node: usize) -> Option<W> {
        let origin = *self.origins.get(row)?;
        let cost = *self.row(row)?.get(node)?;
        (cost < self.unreachable || node == origin).then_some(cost)
    }

    /// Counters summed over all origins
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
