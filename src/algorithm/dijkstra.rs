use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::traits::SearchSettings;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::NodeHeap;
use crate::graph::{is_traversable, NetworkView};
use crate::{Error, Result};

/// Label-setting Dijkstra search under the same mode and thru-node rules
///
/// Settles each node once. Slower than the label-correcting engine on road
/// networks but independent of it, which makes it a useful oracle.
#[derive(Debug, Clone)]
pub struct Dijkstra<W> {
    settings: SearchSettings<W>,
}

impl<W> Dijkstra<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a Dijkstra search with default settings
    pub fn new() -> Self {
        Dijkstra {
            settings: SearchSettings::default(),
        }
    }

    /// Creates a Dijkstra search with explicit settings
    pub fn with_settings(settings: SearchSettings<W>) -> Self {
        Dijkstra { settings }
    }
}

impl<W> Default for Dijkstra<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Dijkstra::new()
    }
}

impl<W, N> ShortestPathAlgorithm<W, N> for Dijkstra<W>
where
    W: Float + Zero + Debug + Copy,
    N: NetworkView<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, network: &N, source: usize) -> Result<ShortestPathResult<W>> {
        if !network.has_node(source) {
            return Err(Error::SourceNotFound);
        }

        let n = network.node_count();
        let SearchSettings { mode, thru_nodes, start_cost, max_label_cost } = &self.settings;

        let mut labels = vec![*max_label_cost; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut link_predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        labels[source] = *start_cost;
        let mut queue = NodeHeap::new();
        queue.push(source, *start_cost);

        while let Some((u, label_u)) = queue.pop() {
            // Stale heap entry
            if settled[u] || label_u > labels[u] {
                continue;
            }
            settled[u] = true;
            if !thru_nodes.is_expandable(u, source) {
                continue;
            }

            for &link in network.outgoing_links(u) {
                if !is_traversable(mode, network.allowed_uses(link)) {
                    continue;
                }
                let v = network.to_node(link);
                let candidate = label_u + network.cost(link);
                if candidate < labels[v] {
                    labels[v] = candidate;
                    predecessors[v] = Some(u);
                    link_predecessors[v] = Some(link);
                    queue.push(v, candidate);
                }
            }
        }

        let distances = labels
            .iter()
            .enumerate()
            .map(|(node, &label)| (label < *max_label_cost || node == source).then_some(label))
            .collect();

        Ok(ShortestPathResult {
            distances,
            predecessors,
            link_predecessors,
            source,
        })
    }
}
