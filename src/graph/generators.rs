use crate::graph::{AllowedUses, ForwardStar, LinkSpec};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Allowed-use patterns drawn for generated road links
const USE_PATTERNS: [&str; 5] = ["all", "auto", "auto;bike", "bike;walk", "walk"];

/// A generated network together with its centroid layout
#[derive(Debug, Clone)]
pub struct GeneratedNetwork {
    pub network: ForwardStar<f64>,
    /// Centroids occupy node indices `0..centroid_count`
    pub centroid_count: usize,
}

impl GeneratedNetwork {
    /// First node index allowed to act as an intermediate hop
    pub fn first_thru_node(&self) -> usize {
        self.centroid_count
    }
}

/// Generates a width*height road grid with `zones` centroids placed first
///
/// Road nodes are linked to their four neighbours in both directions with
/// random costs and random allowed uses. Each centroid gets a connector pair
/// to a random road node. Centroids never link to each other directly.
pub fn grid_network(
    width: usize,
    height: usize,
    zones: usize,
    seed: u64,
) -> Result<GeneratedNetwork> {
    let mut rng = StdRng::seed_from_u64(seed);
    let node_count = zones + width * height;
    let road = |x: usize, y: usize| zones + y * width + x;

    let mut links = Vec::with_capacity(4 * width * height + 2 * zones);
    let add_pair = |links: &mut Vec<LinkSpec<f64>>, rng: &mut StdRng, a: usize, b: usize| {
        let cost = rng.gen_range(1.0..10.0);
        let uses = AllowedUses::from_tokens(USE_PATTERNS[rng.gen_range(0..USE_PATTERNS.len())]);
        links.push(LinkSpec::new(a, b, cost).with_allowed_uses(uses.clone()));
        links.push(LinkSpec::new(b, a, cost).with_allowed_uses(uses));
    };

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                add_pair(&mut links, &mut rng, road(x, y), road(x + 1, y));
            }
            if y + 1 < height {
                add_pair(&mut links, &mut rng, road(x, y), road(x, y + 1));
            }
        }
    }

    if width * height > 0 {
        for zone in 0..zones {
            let attach = road(rng.gen_range(0..width), rng.gen_range(0..height));
            let cost = rng.gen_range(0.5..2.0);
            links.push(LinkSpec::new(zone, attach, cost));
            links.push(LinkSpec::new(attach, zone, cost));
        }
    }

    Ok(GeneratedNetwork {
        network: ForwardStar::from_links(node_count, links)?,
        centroid_count: zones,
    })
}

/// Generates a random directed network with about `edge_factor * n` links
///
/// Self-loops are skipped; every link is open to all modes.
pub fn random_network(n: usize, edge_factor: f64, seed: u64) -> Result<ForwardStar<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let link_count = (edge_factor * n as f64) as usize;
    let mut links = Vec::with_capacity(link_count);

    if n > 1 {
        for _ in 0..link_count {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                links.push(LinkSpec::new(u, v, rng.gen_range(1.0..100.0)));
            }
        }
    }

    ForwardStar::from_links(n, links)
}
