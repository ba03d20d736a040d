mod connections;
mod layout;
pub mod palette;

use rand::Rng;

use crate::catalog::ProjectRecord;

pub use connections::{Edge, connect_nearest};
pub use layout::{PositionedNode, spiral_layout};

#[derive(Clone, Debug, Default)]
pub struct Galaxy {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
}

impl Galaxy {
    pub fn compute<R: Rng>(records: &[ProjectRecord], rng: &mut R) -> Self {
        let nodes = spiral_layout(records, rng);
        let edges = connect_nearest(&nodes);
        Self { nodes, edges }
    }

    pub fn node_for(&self, record: &ProjectRecord) -> Option<&PositionedNode> {
        self.nodes.iter().find(|node| &node.record == record)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn compute_links_layout_and_edges() {
        let records = vec![
            ProjectRecord::new("A", "https://a.example"),
            ProjectRecord::new("B", "https://b.example"),
        ];

        // Zero jitter: A at (-3.5, -3, -1), B at (12.5 cos 0.2 - 1, -3, 12.5 sin 0.2 - 1).
        let galaxy = Galaxy::compute(&records, &mut StepRng::new(0, 0));

        assert_eq!(galaxy.nodes.len(), 2);
        assert!(galaxy.edges.is_empty());
        assert_eq!(galaxy.node_for(&records[1]).map(|node| node.id), Some(1));
        assert!(galaxy.node_for(&ProjectRecord::new("C", "https://c.example")).is_none());
    }
}
