use eframe::egui::{self, Rect, Response, Ui};

use super::super::{ProjectedNode, ViewModel};

const MIN_PICK_RADIUS: f32 = 6.0;

impl ViewModel {
    pub(in crate::app) fn handle_camera_zoom(&mut self, ui: &Ui, response: &Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        self.camera.zoom(scroll);
    }

    pub(in crate::app) fn handle_camera_drag(&mut self, rect: Rect, response: &Response) {
        if response.dragged_by(egui::PointerButton::Primary) {
            self.camera.rotate(response.drag_delta());
        } else if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.camera.pan(rect, response.drag_delta());
        }
    }

    pub(in crate::app) fn hovered_index(
        ui: &Ui,
        projected: &[Option<ProjectedNode>],
    ) -> Option<usize> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        projected
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let node = node.as_ref()?;
                let distance = node.center.distance(pointer);
                (distance <= node.radius.max(MIN_PICK_RADIUS)).then_some((index, node.depth, distance))
            })
            // Nearest to the camera wins when discs overlap.
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.2.total_cmp(&b.2)))
            .map(|(index, _, _)| index)
    }

    pub(in crate::app) fn apply_scene_click(&mut self, index: usize) {
        let Some(node) = self
            .scene
            .as_ref()
            .and_then(|cache| cache.galaxy.nodes.get(index))
        else {
            return;
        };
        self.selection.select(node.record.clone());
    }
}
