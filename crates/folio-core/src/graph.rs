//! Neuron sphere: golden-angle placement and sparse nearest-neighbour links.

use crate::config::{FieldConfig, LinkConfig};
use crate::particle::{sample_range, Particle};
use fnv::FnvHashSet;
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

/// pi * (3 - sqrt(5))
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Unordered link between two neurons, stored with `a < b`.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
    pub target_opacity: f32,
    pub base_opacity: f32,
}

impl Connection {
    pub fn new(i: usize, j: usize, base_opacity: f32) -> Self {
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        Self {
            a,
            b,
            opacity: base_opacity,
            target_opacity: base_opacity,
            base_opacity,
        }
    }

    #[inline]
    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    #[inline]
    pub fn other(&self, index: usize) -> Option<usize> {
        if self.a == index {
            Some(self.b)
        } else if self.b == index {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Neighbour set of one neuron; most have fewer than eight links.
pub type Neighbours = SmallVec<[usize; 8]>;

/// Evenly spread `count` points over a sphere, squeezed into a latitude band.
///
/// Every point lies exactly on the sphere of the given radius.
pub fn fibonacci_sphere(count: usize, radius: f32, band: f32) -> Vec<Vec3> {
    let n = count.max(1) as f32;
    (0..count)
        .map(|i| {
            let y = (1.0 - 2.0 * (i as f32 + 0.5) / n) * band;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = GOLDEN_ANGLE * i as f32;
            Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius
        })
        .collect()
}

/// Link each point to a few of its nearest neighbours.
///
/// Each point draws a fan-out from `links.fan_out`, walks its neighbours in
/// distance order and admits a link when it is under the cutoff and a
/// `keep_probability` draw succeeds. Pairs already linked from the other
/// side are skipped, so the result never holds duplicates or self-links.
pub fn link_neighbours<R: Rng + ?Sized>(
    positions: &[Vec3],
    links: &LinkConfig,
    rng: &mut R,
) -> Vec<Connection> {
    let mut seen: FnvHashSet<(usize, usize)> = FnvHashSet::default();
    let mut out = Vec::new();
    let mut by_distance: Vec<(f32, usize)> = Vec::with_capacity(positions.len());
    for (i, p) in positions.iter().enumerate() {
        by_distance.clear();
        by_distance.extend(
            positions
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(j, q)| (p.distance(*q), j)),
        );
        by_distance.sort_by(|x, y| x.0.total_cmp(&y.0));

        let fan = rng.gen_range(links.fan_out.0..=links.fan_out.1);
        for &(dist, j) in by_distance.iter().take(fan) {
            if dist >= links.cutoff || !rng.gen_bool(links.keep_probability) {
                continue;
            }
            let key = (i.min(j), i.max(j));
            if seen.insert(key) {
                out.push(Connection::new(i, j, links.base_opacity));
            }
        }
    }
    out
}

/// Indices directly linked to `index`.
pub fn neighbours_of(connections: &[Connection], index: usize) -> Neighbours {
    connections.iter().filter_map(|c| c.other(index)).collect()
}

/// Spawn the neuron sphere and its links.
pub fn spawn_sphere<R: Rng + ?Sized>(
    config: &FieldConfig,
    rng: &mut R,
) -> (Vec<Particle>, Vec<Connection>) {
    let positions = fibonacci_sphere(config.count, config.extent, config.latitude_band);
    let connections = match &config.links {
        Some(links) => link_neighbours(&positions, links, rng),
        None => Vec::new(),
    };
    let particles = positions
        .into_iter()
        .map(|p| {
            let size = sample_range(rng, config.size_range);
            let base = sample_range(rng, config.opacity_range);
            Particle::at_rest(p, size, base)
        })
        .collect();
    (particles, connections)
}
