use std::f32::consts::{FRAC_PI_3, TAU};

use eframe::egui::{Pos2, Rect, Vec2, pos2};

use glam::{Mat4, Vec3};

const VERTICAL_FOV: f32 = FRAC_PI_3;
const NEAR_PLANE: f32 = 0.1;
const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 60.0;
const MAX_PITCH: f32 = 1.45;
const ROTATE_SPEED: f32 = 0.008;
// three.js orbit-control units: 2.0 means one turn per 30 s.
const AUTO_ROTATE_SPEED: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct OrbitCamera {
    pub(in crate::app) target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

#[derive(Clone, Copy, Debug)]
pub(in crate::app) struct Projection {
    pub(in crate::app) screen: Pos2,
    pub(in crate::app) depth: f32,
    pub(in crate::app) scale: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(20.0, 20.0, 20.0), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub(in crate::app) fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let pitch = (offset.y / offset.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MAX_PITCH, MAX_PITCH);
        let yaw = offset.z.atan2(offset.x);

        Self {
            target,
            yaw,
            pitch,
            distance,
        }
    }

    #[cfg(test)]
    pub(in crate::app) fn distance(&self) -> f32 {
        self.distance
    }

    pub(in crate::app) fn eye(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target
            + Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw) * self.distance
    }

    fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    // Screen-right and screen-up in world space.
    fn screen_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        (right, right.cross(forward))
    }

    fn focal_length(rect: Rect) -> f32 {
        (rect.height() * 0.5) / (VERTICAL_FOV * 0.5).tan()
    }

    /// `None` when the point is behind the near plane.
    pub(in crate::app) fn project(&self, rect: Rect, point: Vec3) -> Option<Projection> {
        let view_space = self.view().transform_point3(point);
        let depth = -view_space.z;
        if depth <= NEAR_PLANE {
            return None;
        }

        let scale = Self::focal_length(rect) / depth;
        let center = rect.center();
        Some(Projection {
            screen: pos2(
                center.x + view_space.x * scale,
                center.y - view_space.y * scale,
            ),
            depth,
            scale,
        })
    }

    pub(in crate::app) fn rotate(&mut self, drag: Vec2) {
        self.yaw = (self.yaw + drag.x * ROTATE_SPEED).rem_euclid(TAU);
        self.pitch = (self.pitch + drag.y * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub(in crate::app) fn pan(&mut self, rect: Rect, drag: Vec2) {
        let (right, up) = self.screen_axes();
        let world_per_pixel = self.distance / Self::focal_length(rect);
        self.target += up * (drag.y * world_per_pixel) - right * (drag.x * world_per_pixel);
    }

    pub(in crate::app) fn zoom(&mut self, scroll: f32) {
        let factor = (1.0 - (scroll * 0.0018)).clamp(0.85, 1.15);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub(in crate::app) fn auto_rotate(&mut self, delta_seconds: f32) {
        let radians_per_second = TAU / 60.0 * AUTO_ROTATE_SPEED;
        self.yaw = (self.yaw + radians_per_second * delta_seconds).rem_euclid(TAU);
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))
    }

    fn assert_point_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.distance(expected) < 1e-3,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn default_camera_sits_at_twenty_twenty_twenty() {
        let camera = OrbitCamera::default();
        assert_point_close(camera.eye(), Vec3::new(20.0, 20.0, 20.0));
    }

    #[test]
    fn target_projects_to_viewport_center() {
        let camera = OrbitCamera::default();
        let projection = camera.project(viewport(), Vec3::ZERO).unwrap();

        assert!((projection.screen - viewport().center()).length() < 1e-3);
        assert!((projection.depth - camera.distance()).abs() < 1e-3);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = OrbitCamera::default();
        assert!(camera.project(viewport(), Vec3::new(40.0, 40.0, 40.0)).is_none());
    }

    #[test]
    fn nearer_points_project_larger() {
        let camera = OrbitCamera::default();
        let near = camera.project(viewport(), Vec3::new(5.0, 5.0, 5.0)).unwrap();
        let far = camera.project(viewport(), Vec3::new(-5.0, -5.0, -5.0)).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn world_up_projects_upwards() {
        let camera = OrbitCamera::default();
        let above = camera.project(viewport(), Vec3::new(0.0, 5.0, 0.0)).unwrap();
        assert!(above.screen.y < viewport().center().y);
    }

    #[test]
    fn pan_axes_follow_the_screen() {
        let camera = OrbitCamera::default();
        let (right, up) = camera.screen_axes();
        let center = viewport().center();

        let sideways = camera.project(viewport(), right * 5.0).unwrap();
        assert!(sideways.screen.x > center.x);
        assert!((sideways.screen.y - center.y).abs() < 1e-2);

        let upwards = camera.project(viewport(), up * 5.0).unwrap();
        assert!(upwards.screen.y < center.y);
        assert!((upwards.screen.x - center.x).abs() < 1e-2);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = OrbitCamera::default();
        for _ in 0..200 {
            camera.zoom(500.0);
        }
        assert_eq!(camera.distance(), MIN_DISTANCE);

        for _ in 0..200 {
            camera.zoom(-500.0);
        }
        assert_eq!(camera.distance(), MAX_DISTANCE);
    }

    #[test]
    fn rotation_keeps_pitch_away_from_the_poles() {
        let mut camera = OrbitCamera::default();
        camera.rotate(vec2(0.0, 10_000.0));
        assert!(camera.eye().y < camera.distance());
        assert!(camera.project(viewport(), Vec3::ZERO).is_some());
    }

    #[test]
    fn auto_rotation_preserves_distance_and_height() {
        let mut camera = OrbitCamera::default();
        let before = camera.eye();

        camera.auto_rotate(30.0);

        let after = camera.eye();
        assert!((after.y - before.y).abs() < 1e-3);
        assert!((after.length() - before.length()).abs() < 1e-3);
        assert!(after.distance(before) > 1.0);
    }

    #[test]
    fn panning_moves_the_target() {
        let mut camera = OrbitCamera::default();
        camera.pan(viewport(), vec2(40.0, 0.0));
        assert_ne!(camera.target, Vec3::ZERO);
        assert!(((camera.eye() - camera.target).length() - camera.distance()).abs() < 1e-3);
    }
}
