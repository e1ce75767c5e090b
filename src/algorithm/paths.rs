//! Back-walking predecessor arrays into node and link sequences.

/// A reconstructed path, origin first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTrace {
    pub nodes: Vec<usize>,
    pub links: Vec<usize>,
}

/// Walks predecessors from `target` back to `source`
///
/// Returns `None` when the chain breaks before reaching the source or loops.
/// The caller decides whether `target` was reached at all.
pub fn trace_path(
    source: usize,
    target: usize,
    node_pred: &[Option<usize>],
    link_pred: &[Option<usize>],
) -> Option<PathTrace> {
    if target >= node_pred.len() || source >= node_pred.len() {
        return None;
    }

    let mut nodes = vec![target];
    let mut links = Vec::new();
    let mut current = target;

    while current != source {
        let (pred, link) = match (node_pred[current], link_pred[current]) {
            (Some(pred), Some(link)) => (pred, link),
            _ => {
                log::warn!(
                    "broken predecessor chain at node {} while tracing {} -> {}",
                    current,
                    source,
                    target
                );
                return None;
            }
        };
        // A simple path never holds more nodes than the network
        if nodes.len() >= node_pred.len() {
            log::warn!("predecessor cycle detected while tracing {} -> {}", source, target);
            return None;
        }
        nodes.push(pred);
        links.push(link);
        current = pred;
    }

    nodes.reverse();
    links.reverse();
    Some(PathTrace { nodes, links })
}
