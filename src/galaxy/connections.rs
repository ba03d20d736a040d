use glam::Vec3;

use super::layout::PositionedNode;

pub const CONNECTION_DISTANCE: f32 = 8.0;
pub const NEIGHBORS_KEPT: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub start: Vec3,
    pub end: Vec3,
}

/// Mutual nearest neighbours produce both `a -> b` and `b -> a`.
pub fn connect_nearest(nodes: &[PositionedNode]) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut candidates = Vec::new();

    for (source, node) in nodes.iter().enumerate() {
        candidates.clear();
        candidates.extend(nodes.iter().enumerate().filter_map(|(target, other)| {
            if target == source {
                return None;
            }
            let distance = node.position.distance(other.position);
            debug_assert!(distance.is_finite(), "non-finite distance {source} -> {target}");
            (distance < CONNECTION_DISTANCE).then_some((target, distance))
        }));

        // Stable, so equal distances keep the lower index first.
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        for &(target, _distance) in candidates.iter().take(NEIGHBORS_KEPT) {
            edges.push(Edge {
                source: nodes[source].id,
                target: nodes[target].id,
                start: node.position,
                end: nodes[target].position,
            });
        }
    }

    edges
}
