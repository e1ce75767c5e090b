use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::mode::AllowedUses;
use crate::graph::traits::NetworkView;
use crate::{Error, Result};

/// A link as supplied by the network builder
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSpec<W> {
    pub from: usize,
    pub to: usize,
    pub cost: W,
    pub allowed_uses: AllowedUses,
}

impl<W> LinkSpec<W> {
    /// Creates a link open to every mode
    pub fn new(from: usize, to: usize, cost: W) -> Self {
        LinkSpec {
            from,
            to,
            cost,
            allowed_uses: AllowedUses::all(),
        }
    }

    /// Restricts the link to the given allowed uses
    pub fn with_allowed_uses(mut self, allowed_uses: AllowedUses) -> Self {
        self.allowed_uses = allowed_uses;
        self
    }
}

/// Owned forward-star network
///
/// The outgoing links of node `n` are `link_order[first_link_from[n]..last_link_from[n]]`.
#[derive(Debug, Clone)]
pub struct ForwardStar<W>
where
    W: Float + Zero + Debug + Copy,
{
    node_count: usize,
    first_link_from: Vec<usize>,
    last_link_from: Vec<usize>,
    link_order: Vec<usize>,
    from_node: Vec<usize>,
    to_node: Vec<usize>,
    cost: Vec<W>,
    allowed_uses: Vec<AllowedUses>,
}

impl<W> ForwardStar<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a forward star from a link list
    ///
    /// Link indices follow the input order. Within a node, outgoing links are
    /// scanned in input order.
    pub fn from_links(node_count: usize, links: Vec<LinkSpec<W>>) -> Result<Self> {
        let mut degree = vec![0usize; node_count];
        for (idx, link) in links.iter().enumerate() {
            if link.from >= node_count || link.to >= node_count {
                return Err(Error::InvalidLink { link: idx, from: link.from, to: link.to });
            }
            if !link.cost.is_finite() || link.cost < W::zero() {
                return Err(Error::InvalidCost(idx));
            }
            degree[link.from] += 1;
        }

        // Prefix sums give each node its slot range
        let mut first_link_from = Vec::with_capacity(node_count);
        let mut offset = 0;
        for d in &degree {
            first_link_from.push(offset);
            offset += d;
        }
        let mut last_link_from = first_link_from.clone();
        let mut link_order = vec![0usize; links.len()];
        for (idx, link) in links.iter().enumerate() {
            link_order[last_link_from[link.from]] = idx;
            last_link_from[link.from] += 1;
        }

        let mut from_node = Vec::with_capacity(links.len());
        let mut to_node = Vec::with_capacity(links.len());
        let mut cost = Vec::with_capacity(links.len());
        let mut allowed_uses = Vec::with_capacity(links.len());
        for link in links {
            from_node.push(link.from);
            to_node.push(link.to);
            cost.push(link.cost);
            allowed_uses.push(link.allowed_uses);
        }

        log::debug!("built forward star with {} nodes and {} links", node_count, from_node.len());

        Ok(ForwardStar {
            node_count,
            first_link_from,
            last_link_from,
            link_order,
            from_node,
            to_node,
            cost,
            allowed_uses,
        })
    }

    /// Adopts caller-built forward-star arrays after checking them
    ///
    /// Every node range must lie inside `link_order`, list only links whose
    /// tail is that node, and the ranges together must cover each link exactly once.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        node_count: usize,
        first_link_from: Vec<usize>,
        last_link_from: Vec<usize>,
        link_order: Vec<usize>,
        from_node: Vec<usize>,
        to_node: Vec<usize>,
        cost: Vec<W>,
        allowed_uses: Vec<AllowedUses>,
    ) -> Result<Self> {
        let link_count = from_node.len();
        let lengths = [to_node.len(), cost.len(), allowed_uses.len()];
        if lengths.iter().any(|&len| len != link_count) {
            return Err(Error::MalformedForwardStar(format!(
                "per-link arrays disagree in length ({}, {}, {}, {})",
                link_count,
                to_node.len(),
                cost.len(),
                allowed_uses.len()
            )));
        }
        if first_link_from.len() != node_count || last_link_from.len() != node_count {
            return Err(Error::MalformedForwardStar(format!(
                "expected {} node ranges, got {} and {}",
                node_count,
                first_link_from.len(),
                last_link_from.len()
            )));
        }
        if link_order.len() != link_count {
            return Err(Error::MalformedForwardStar(format!(
                "link order lists {} entries for {} links",
                link_order.len(),
                link_count
            )));
        }

        for link in 0..link_count {
            if from_node[link] >= node_count || to_node[link] >= node_count {
                return Err(Error::InvalidLink { link, from: from_node[link], to: to_node[link] });
            }
            if !cost[link].is_finite() || cost[link] < W::zero() {
                return Err(Error::InvalidCost(link));
            }
        }

        let mut seen = vec![false; link_count];
        for node in 0..node_count {
            let (first, last) = (first_link_from[node], last_link_from[node]);
            if first > last || last > link_count {
                return Err(Error::MalformedForwardStar(format!(
                    "node {} has range {}..{} outside 0..{}",
                    node, first, last, link_count
                )));
            }
            for &link in &link_order[first..last] {
                if link >= link_count {
                    return Err(Error::MalformedForwardStar(format!("unknown link {}", link)));
                }
                if from_node[link] != node {
                    return Err(Error::MalformedForwardStar(format!(
                        "link {} listed under node {} but leaves node {}",
                        link, node, from_node[link]
                    )));
                }
                if std::mem::replace(&mut seen[link], true) {
                    return Err(Error::MalformedForwardStar(format!("link {} listed twice", link)));
                }
            }
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(Error::MalformedForwardStar(format!("link {} is never listed", missing)));
        }

        Ok(ForwardStar {
            node_count,
            first_link_from,
            last_link_from,
            link_order,
            from_node,
            to_node,
            cost,
            allowed_uses,
        })
    }

    /// Replaces the cost of every link, keeping the topology
    ///
    /// Used between assignment iterations when only travel times change.
    pub fn set_costs(&mut self, cost: Vec<W>) -> Result<()> {
        if cost.len() != self.cost.len() {
            return Err(Error::MalformedForwardStar(format!(
                "expected {} costs, got {}",
                self.cost.len(),
                cost.len()
            )));
        }
        if let Some(bad) = cost.iter().position(|c| !c.is_finite() || *c < W::zero()) {
            return Err(Error::InvalidCost(bad));
        }
        self.cost = cost;
        Ok(())
    }

    pub fn first_link_from(&self) -> &[usize] {
        &self.first_link_from
    }

    pub fn last_link_from(&self) -> &[usize] {
        &self.last_link_from
    }

    pub fn link_order(&self) -> &[usize] {
        &self.link_order
    }
}

impl<W> NetworkView<W> for ForwardStar<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn link_count(&self) -> usize {
        self.from_node.len()
    }

    #[inline]
    fn outgoing_links(&self, node: usize) -> &[usize] {
        &self.link_order[self.first_link_from[node]..self.last_link_from[node]]
    }

    #[inline]
    fn from_node(&self, link: usize) -> usize {
        self.from_node[link]
    }

    #[inline]
    fn to_node(&self, link: usize) -> usize {
        self.to_node[link]
    }

    #[inline]
    fn cost(&self, link: usize) -> W {
        self.cost[link]
    }

    #[inline]
    fn allowed_uses(&self, link: usize) -> &AllowedUses {
        &self.allowed_uses[link]
    }
}
