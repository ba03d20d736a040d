use eframe::egui::Color32;
use glam::Vec3;
use rand::Rng;

use crate::catalog::ProjectRecord;

use super::palette::category_color;

pub const GALAXY_RADIUS: f32 = 30.0;
pub const SPIRAL_TIGHTNESS: f32 = 0.2;
pub const RADIAL_JITTER: f32 = 2.5;
pub const PLANAR_JITTER: f32 = 1.0;
pub const DISC_HALF_THICKNESS: f32 = 3.0;

/// `id` is the index in the list the layout was computed from and means
/// nothing once the layout is recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
    pub id: usize,
    pub record: ProjectRecord,
    pub position: Vec3,
    pub color: Color32,
}

pub fn spiral_layout<R: Rng>(
    records: &[ProjectRecord],
    rng: &mut R,
) -> Vec<PositionedNode> {
    let n = records.len();
    if n == 0 {
        return Vec::new();
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let angle = SPIRAL_TIGHTNESS * index as f32;
            let r = GALAXY_RADIUS * (index as f32 / n as f32)
                + rng.gen_range(-RADIAL_JITTER..=RADIAL_JITTER);

            let x = r * angle.cos() + rng.gen_range(-PLANAR_JITTER..=PLANAR_JITTER);
            let y = rng.gen_range(-DISC_HALF_THICKNESS..=DISC_HALF_THICKNESS);
            let z = r * angle.sin() + rng.gen_range(-PLANAR_JITTER..=PLANAR_JITTER);

            let position = Vec3::new(x, y, z);
            debug_assert!(position.is_finite(), "non-finite layout position {position:?}");

            PositionedNode {
                id: index,
                record: record.clone(),
                position,
                color: category_color(record.category),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use rand::{RngCore, SeedableRng};

    use super::*;
    use crate::catalog::Category;
    use crate::galaxy::palette::{BRAND_PURPLE, DEFI_GREEN, NFT_PINK};

    fn sample_records(count: usize) -> Vec<ProjectRecord> {
        let categories = [
            Some(Category::DeFi),
            Some(Category::Nft),
            None,
            Some(Category::Gaming),
            Some(Category::Wallet),
        ];
        (0..count)
            .map(|index| {
                let mut record = ProjectRecord::new(
                    format!("Project {index}"),
                    format!("https://project-{index}.example"),
                );
                record.category = categories[index % categories.len()];
                if index % 2 == 0 {
                    record = record.with_description(format!("Entry number {index}"));
                }
                record
            })
            .collect()
    }

    /// Replays `values` from `next_u32`, cycling.
    struct ScriptedRng {
        values: Vec<u32>,
        next: usize,
    }

    impl ScriptedRng {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_input_yields_no_nodes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(spiral_layout(&[], &mut rng).is_empty());
    }

    #[test]
    fn one_node_per_record_with_index_ids() {
        let records = sample_records(40);
        let mut rng = StdRng::seed_from_u64(11);

        let nodes = spiral_layout(&records, &mut rng);

        assert_eq!(nodes.len(), records.len());
        for (index, (node, record)) in nodes.iter().zip(&records).enumerate() {
            assert_eq!(node.id, index);
            assert_eq!(&node.record, record);
            assert_eq!(node.color, category_color(record.category));
        }
    }

    #[test]
    fn zero_jitter_places_nodes_at_lower_bounds() {
        let records = sample_records(4);
        let mut rng = StepRng::new(0, 0);

        let nodes = spiral_layout(&records, &mut rng);

        // i = 0: r = -2.5, angle = 0
        assert_close(nodes[0].position.x, -3.5);
        assert_close(nodes[0].position.y, -3.0);
        assert_close(nodes[0].position.z, -1.0);

        // i = 2: r = 30 * 0.5 - 2.5 = 12.5, angle = 0.4
        let angle = 0.4_f32;
        assert_close(nodes[2].position.x, 12.5 * angle.cos() - 1.0);
        assert_close(nodes[2].position.y, -3.0);
        assert_close(nodes[2].position.z, 12.5 * angle.sin() - 1.0);
    }

    #[test]
    fn jitter_stays_within_documented_bounds() {
        let records = sample_records(25);
        let n = records.len() as f32;

        for mut rng in [StepRng::new(0, 0), StepRng::new(u64::MAX, 0)] {
            let nodes = spiral_layout(&records, &mut rng);
            for node in &nodes {
                let angle = SPIRAL_TIGHTNESS * node.id as f32;
                let base = GALAXY_RADIUS * (node.id as f32 / n);
                let (sin, cos) = angle.sin_cos();

                assert!(node.position.y.abs() <= DISC_HALF_THICKNESS + 1e-4);

                // Radial jitter tops out at 2.5, planar jitter at 1.0.
                let reach = RADIAL_JITTER + PLANAR_JITTER + 1e-3;
                assert!((node.position.x - base * cos).abs() <= reach);
                assert!((node.position.z - base * sin).abs() <= reach);
            }
        }
    }

    #[test]
    fn planar_jitter_is_independent_of_radial_jitter() {
        let records = sample_records(1);
        // Draw order per node: r, x, y, z.
        let mut rng = ScriptedRng::new(&[0, u32::MAX, 0, 0]);

        let nodes = spiral_layout(&records, &mut rng);

        // r = -2.5, jitter_x = +1, jitter_z = -1, angle = 0
        assert_close(nodes[0].position.x, -1.5);
        assert_close(nodes[0].position.y, -3.0);
        assert_close(nodes[0].position.z, -1.0);

        let mut rng = ScriptedRng::new(&[u32::MAX, 0, u32::MAX, u32::MAX]);
        let nodes = spiral_layout(&records, &mut rng);

        // r = 2.5, jitter_x = -1, jitter_z = +1
        assert_close(nodes[0].position.x, 1.5);
        assert_close(nodes[0].position.y, 3.0);
        assert_close(nodes[0].position.z, 1.0);
    }

    #[test]
    fn random_layouts_keep_disc_thickness() {
        let records = sample_records(60);
        let mut rng = StdRng::seed_from_u64(0xfeed);

        for _ in 0..20 {
            for node in spiral_layout(&records, &mut rng) {
                assert!(node.position.is_finite());
                assert!(node.position.y.abs() <= DISC_HALF_THICKNESS);
            }
        }
    }

    #[test]
    fn repeated_layouts_keep_fields_but_move_positions() {
        let records = sample_records(12);
        let mut rng = StdRng::seed_from_u64(3);

        let first = spiral_layout(&records, &mut rng);
        let second = spiral_layout(&records, &mut rng);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.record, b.record);
            assert_eq!(a.color, b.color);
        }
        assert!(
            first
                .iter()
                .zip(&second)
                .any(|(a, b)| a.position != b.position)
        );
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let records = sample_records(8);

        let first = spiral_layout(&records, &mut StdRng::seed_from_u64(42));
        let second = spiral_layout(&records, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn three_record_scenario_colors() {
        let records = vec![
            ProjectRecord::new("Kuru", "https://kuru.io").with_category(Category::DeFi),
            ProjectRecord::new("Magic Eden", "https://magiceden.io").with_category(Category::Nft),
            ProjectRecord::new("Monad Faucet", "https://faucet.monad.xyz"),
        ];
        let mut rng = StdRng::seed_from_u64(99);

        let nodes = spiral_layout(&records, &mut rng);

        assert_eq!(nodes.iter().map(|node| node.id).collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(nodes[0].color, DEFI_GREEN);
        assert_eq!(nodes[1].color, NFT_PINK);
        assert_eq!(nodes[2].color, BRAND_PURPLE);
        assert!(nodes.iter().all(|node| (-3.0..=3.0).contains(&node.position.y)));
    }
}
