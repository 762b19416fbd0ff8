//! Golden-angle sphere layout: node positions and distance-thresholded edges.

use bevy::prelude::*;

use crate::config::SceneTuning;

/// Static geometry consumed by the renderer: node positions on the sphere
/// surface and index pairs for nearby-node edges. Generated once at startup
/// and never mutated afterwards.
#[derive(Resource, Clone, Debug)]
pub struct SphereLayout {
    pub nodes: Vec<Vec3>,
    pub edges: Vec<[usize; 2]>,
}

impl SphereLayout {
    pub fn generate(tuning: &SceneTuning) -> Self {
        let nodes = fibonacci_sphere(tuning.node_count, tuning.sphere_radius);
        let edges = nearby_edges(&nodes, tuning.edge_threshold);
        Self { nodes, edges }
    }

    /// Linear interpolation along an edge, in group-local space.
    pub fn point_on_edge(&self, edge: usize, t: f32) -> Vec3 {
        let [a, b] = self.edges[edge];
        self.nodes[a].lerp(self.nodes[b], t)
    }
}

/// Evenly distributes `count` points on a sphere of the given radius using
/// the golden-angle (Fibonacci) spiral mapping of index → latitude/longitude.
/// Deterministic for fixed inputs; index 0 lands on the north pole and the
/// last index on the south pole.
pub fn fibonacci_sphere(count: usize, radius: f32) -> Vec<Vec3> {
    assert!(count >= 2, "sphere layout needs at least two nodes");

    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 / (count - 1) as f32) * 2.0;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let phi = golden_angle * i as f32;
            Vec3::new(
                phi.cos() * ring * radius,
                y * radius,
                phi.sin() * ring * radius,
            )
        })
        .collect()
}

/// All unordered node pairs closer than `threshold`, lower index first.
/// Quadratic scan over all pairs; each pair appears at most once.
pub fn nearby_edges(nodes: &[Vec3], threshold: f32) -> Vec<[usize; 2]> {
    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if nodes[i].distance(nodes[j]) < threshold {
                edges.push([i, j]);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_generation_is_deterministic() {
        let first = fibonacci_sphere(220, 55.0);
        let second = fibonacci_sphere(220, 55.0);
        assert_eq!(first, second);
    }

    #[test]
    fn all_nodes_sit_on_the_sphere_surface() {
        let radius = 55.0;
        for position in fibonacci_sphere(220, radius) {
            assert!(
                (position.length() - radius).abs() < 1e-3,
                "node {position:?} is off the sphere surface"
            );
        }
    }

    #[test]
    fn four_nodes_include_both_poles() {
        let nodes = fibonacci_sphere(4, 10.0);

        assert!((nodes[0] - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-4);
        assert!((nodes[3] - Vec3::new(0.0, -10.0, 0.0)).length() < 1e-4);
        assert!((nodes[0].distance(nodes[3]) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn edges_are_unique_and_within_threshold() {
        let nodes = fibonacci_sphere(220, 55.0);
        let threshold = 24.0;
        let edges = nearby_edges(&nodes, threshold);

        assert!(!edges.is_empty());

        let mut seen = std::collections::HashSet::new();
        for [a, b] in &edges {
            assert!(a < b, "edge [{a}, {b}] is not ordered");
            assert!(seen.insert([*a, *b]), "edge [{a}, {b}] appears twice");
            assert!(nodes[*a].distance(nodes[*b]) < threshold);
        }
    }

    #[test]
    fn far_threshold_connects_every_pair() {
        let nodes = fibonacci_sphere(8, 1.0);
        let edges = nearby_edges(&nodes, 10.0);
        assert_eq!(edges.len(), 8 * 7 / 2);
    }

    #[test]
    fn point_on_edge_interpolates_endpoints() {
        let layout = SphereLayout {
            nodes: vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
            edges: vec![[0, 1]],
        };

        assert_eq!(layout.point_on_edge(0, 0.0), Vec3::ZERO);
        assert_eq!(layout.point_on_edge(0, 0.5), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(layout.point_on_edge(0, 1.0), Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn generate_respects_tuning() {
        let tuning = SceneTuning {
            node_count: 16,
            sphere_radius: 5.0,
            edge_threshold: 4.0,
            pulse_count: 4,
        };
        let layout = SphereLayout::generate(&tuning);

        assert_eq!(layout.nodes.len(), 16);
        for [a, b] in &layout.edges {
            assert!(layout.nodes[*a].distance(layout.nodes[*b]) < 4.0);
        }
    }
}
