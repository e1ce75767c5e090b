use std::ops::Range;

/// Which nodes may act as intermediate hops
///
/// Centroids (zone connectors) are valid path endpoints but must not be
/// passed through. The search origin is always expandable, whatever the
/// policy says.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThruNodes {
    /// Every node is a thru node
    #[default]
    All,
    /// Only nodes inside the half-open range are thru nodes
    Range(Range<usize>),
    /// `mask[n]` tells whether node `n` is a thru node; nodes past the end are
    Mask(Vec<bool>),
}

impl ThruNodes {
    /// Centroids numbered first: nodes at or above `first_thru_node` are thru nodes
    pub fn from_first_thru_node(first_thru_node: usize) -> Self {
        ThruNodes::Range(first_thru_node..usize::MAX)
    }

    /// Centroids numbered last: nodes at or below `last_thru_node` are thru nodes
    pub fn from_last_thru_node(last_thru_node: usize) -> Self {
        ThruNodes::Range(0..last_thru_node.saturating_add(1))
    }

    /// Marks the listed nodes as centroids, every other node is a thru node
    pub fn from_centroids<I>(node_count: usize, centroids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = vec![true; node_count];
        for centroid in centroids {
            if let Some(slot) = mask.get_mut(centroid) {
                *slot = false;
            }
        }
        ThruNodes::Mask(mask)
    }

    /// Returns true if `node` may be passed through
    #[inline]
    pub fn is_thru_node(&self, node: usize) -> bool {
        match self {
            ThruNodes::All => true,
            ThruNodes::Range(range) => range.contains(&node),
            ThruNodes::Mask(mask) => mask.get(node).copied().unwrap_or(true),
        }
    }

    /// Returns true if the outgoing links of `node` are scanned in a search from `origin`
    #[inline]
    pub fn is_expandable(&self, node: usize, origin: usize) -> bool {
        node == origin || self.is_thru_node(node)
    }
}
