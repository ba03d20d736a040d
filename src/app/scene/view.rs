use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Stroke, Ui, vec2};
use glam::Vec3;

use crate::galaxy::palette::{BRAND_PURPLE, SPACE_BLACK};

use super::super::render_utils::{
    blend_color, circle_visible, draw_glow, edge_visible, fog_visibility, with_alpha,
};
use super::super::{ProjectedNode, SceneCache, ViewModel};
use super::camera::OrbitCamera;

const NODE_RADIUS: f32 = 0.3;
const EDGE_OPACITY: f32 = 0.18;
const FLOAT_SPEED: f32 = 1.5;
const FLOAT_AMPLITUDE: f32 = 0.15;

fn pulse_scale(time: f32, id: usize, emphasized: bool) -> f32 {
    if emphasized {
        1.5
    } else {
        1.0 + (time * 2.0 + id as f32).sin() * 0.1
    }
}

fn float_offset(time: f32, id: usize) -> Vec3 {
    Vec3::new(0.0, (time * FLOAT_SPEED + id as f32 * 0.7).sin() * FLOAT_AMPLITUDE, 0.0)
}

impl ViewModel {
    fn project_nodes(
        camera: &OrbitCamera,
        rect: Rect,
        time: f32,
        hovered: Option<usize>,
        selected_index: Option<usize>,
        cache: &mut SceneCache,
    ) {
        let scratch = &mut cache.view_scratch;
        scratch.projected.clear();
        scratch.projected.extend(cache.galaxy.nodes.iter().map(|node| {
            let emphasized = hovered == Some(node.id) || selected_index == Some(node.id);
            let world = node.position + float_offset(time, node.id);
            camera.project(rect, world).map(|projection| ProjectedNode {
                center: projection.screen,
                radius: (NODE_RADIUS * pulse_scale(time, node.id, emphasized) * projection.scale)
                    .clamp(1.5, 40.0),
                depth: projection.depth,
            })
        }));

        scratch.draw_order.clear();
        scratch
            .draw_order
            .extend((0..scratch.projected.len()).filter(|&index| scratch.projected[index].is_some()));
        // Far to near.
        scratch.draw_order.sort_by(|a, b| {
            let depth = |index: usize| scratch.projected[index].map_or(0.0, |node| node.depth);
            depth(*b).total_cmp(&depth(*a))
        });
    }

    fn draw_stars(&self, painter: &egui::Painter, rect: Rect) {
        for (index, star) in self.stars.iter().enumerate() {
            let Some(projection) = self.camera.project(rect, *star) else {
                continue;
            };
            if !rect.contains(projection.screen) {
                continue;
            }
            let brightness = 0.35 + ((index * 7919) % 100) as f32 / 160.0;
            painter.circle_filled(
                projection.screen,
                if index % 11 == 0 { 1.3 } else { 0.8 },
                with_alpha(Color32::WHITE, brightness),
            );
        }
    }

    pub(in crate::app) fn draw_scene(&mut self, ui: &mut Ui) {
        if self.galaxy_dirty {
            self.rebuild_galaxy();
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, SPACE_BLACK);

        self.handle_camera_zoom(ui, &response);
        self.handle_camera_drag(rect, &response);

        let (time, delta_seconds) =
            ui.input(|input| (input.time as f32, input.stable_dt.clamp(0.0, 0.1)));
        if self.selection.selected().is_none() && !response.dragged() {
            self.camera.auto_rotate(delta_seconds);
        }
        ui.ctx().request_repaint();

        self.draw_stars(&painter, rect);

        let Some(cache) = self.scene.as_mut() else {
            return;
        };

        if cache.galaxy.nodes.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No projects match the current filter.",
                FontId::proportional(16.0),
                Color32::from_gray(170),
            );
            return;
        }

        let selected_index = self
            .selection
            .selected()
            .and_then(|record| cache.galaxy.node_for(record))
            .map(|node| node.id);

        // Pick against last frame's projection, then project again with the hover emphasis.
        let hovered = Self::hovered_index(ui, &cache.view_scratch.projected)
            .filter(|&index| index < cache.galaxy.nodes.len());
        Self::project_nodes(&self.camera, rect, time, hovered, selected_index, cache);

        if hovered.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        for edge in &cache.galaxy.edges {
            let (Some(start), Some(end)) = (
                cache.view_scratch.projected.get(edge.source).copied().flatten(),
                cache.view_scratch.projected.get(edge.target).copied().flatten(),
            ) else {
                continue;
            };
            if !edge_visible(rect, start.center, end.center, 1.0) {
                continue;
            }

            let fog = fog_visibility((start.depth + end.depth) * 0.5);
            painter.line_segment(
                [start.center, end.center],
                Stroke::new(1.0, with_alpha(BRAND_PURPLE, EDGE_OPACITY * fog)),
            );
        }

        for &index in &cache.view_scratch.draw_order {
            let Some(projected) = cache.view_scratch.projected[index] else {
                continue;
            };
            if !circle_visible(rect, projected.center, projected.radius * 3.2) {
                continue;
            }

            let node = &cache.galaxy.nodes[index];
            let is_hovered = hovered == Some(index);
            let is_selected = selected_index == Some(index);
            let emphasized = is_hovered || is_selected;
            let fog = fog_visibility(projected.depth);

            let glow_color = if is_selected { BRAND_PURPLE } else { node.color };
            let glow_strength = if emphasized { 1.0 } else { 0.45 };
            draw_glow(&painter, projected.center, projected.radius, glow_color, glow_strength * fog);

            let fill = if is_selected {
                Color32::WHITE
            } else {
                blend_color(SPACE_BLACK, node.color, 0.25 + (0.75 * fog))
            };
            painter.circle_filled(projected.center, projected.radius, fill);

            if is_selected {
                painter.circle_stroke(
                    projected.center,
                    projected.radius + 4.0,
                    Stroke::new(1.6, with_alpha(BRAND_PURPLE, 0.85)),
                );
            }

            if emphasized {
                painter.text(
                    projected.center - vec2(0.0, projected.radius + 6.0),
                    Align2::CENTER_BOTTOM,
                    node.record.name.as_str(),
                    FontId::proportional(14.0),
                    Color32::WHITE,
                );
            }
        }

        if let Some(index) = hovered {
            let node = &cache.galaxy.nodes[index];
            let category = node
                .record
                .category
                .map_or("Uncategorized", |category| category.label());
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                format!("{}  |  {}  |  {}", node.record.name, category, node.record.url),
                FontId::proportional(13.0),
                Color32::from_gray(230),
            );
        }

        if response.clicked_by(egui::PointerButton::Primary)
            && let Some(index) = hovered
        {
            self.apply_scene_click(index);
        }
    }
}
