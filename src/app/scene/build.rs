use std::f32::consts::TAU;

use glam::Vec3;
use log::debug;
use rand::Rng;

use crate::galaxy::Galaxy;

use super::super::{SceneCache, ViewModel, ViewScratch};

const STAR_COUNT: usize = 1_500;
const STAR_RADIUS: f32 = 100.0;
const STAR_DEPTH: f32 = 50.0;

pub(in crate::app) fn starfield<R: Rng>(rng: &mut R, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let theta = rng.gen_range(0.0..TAU);
            let cos_phi: f32 = rng.gen_range(-1.0..=1.0);
            let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
            let radius = STAR_RADIUS + rng.gen_range(0.0..=STAR_DEPTH);
            Vec3::new(
                radius * sin_phi * theta.cos(),
                radius * cos_phi,
                radius * sin_phi * theta.sin(),
            )
        })
        .collect()
}

impl ViewModel {
    pub(in crate::app) fn default_starfield<R: Rng>(rng: &mut R) -> Vec<Vec3> {
        starfield(rng, STAR_COUNT)
    }

    pub(in crate::app) fn rebuild_galaxy(&mut self) {
        self.layout_revision = self.layout_revision.wrapping_add(1);

        let visible = self.filter.visible_projects(&self.catalog);
        let galaxy = Galaxy::compute(&visible, &mut self.rng);

        debug!(
            "layout {}: {} nodes, {} edges (filter {}, search {:?})",
            self.layout_revision,
            galaxy.nodes.len(),
            galaxy.edges.len(),
            self.filter.category().label(),
            self.filter.search_term()
        );

        let mut view_scratch = self
            .scene
            .take()
            .map(|cache| cache.view_scratch)
            .unwrap_or_default();
        view_scratch.projected.clear();
        view_scratch.draw_order.clear();

        self.scene = Some(SceneCache {
            galaxy,
            view_scratch,
        });
        self.galaxy_dirty = false;
    }
}
