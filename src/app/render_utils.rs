use eframe::egui::{Color32, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui, vec2};

use crate::galaxy::palette::{BRAND_LIGHT, BRAND_PURPLE};

const FOG_NEAR: f32 = 20.0;
const FOG_FAR: f32 = 80.0;

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// 1.0 up to the fog start, fading linearly to 0.0 at the fog end.
pub(super) fn fog_visibility(depth: f32) -> f32 {
    1.0 - ((depth - FOG_NEAR) / (FOG_FAR - FOG_NEAR)).clamp(0.0, 1.0)
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn edge_visible(rect: Rect, start: Pos2, end: Pos2, padding: f32) -> bool {
    let min_x = start.x.min(end.x) - padding;
    let max_x = start.x.max(end.x) + padding;
    let min_y = start.y.min(end.y) - padding;
    let max_y = start.y.max(end.y) + padding;

    if max_x < rect.left() || min_x > rect.right() || max_y < rect.top() || min_y > rect.bottom() {
        return false;
    }

    if rect.contains(start) || rect.contains(end) {
        return true;
    }

    let top_left = rect.left_top();
    let top_right = rect.right_top();
    let bottom_left = rect.left_bottom();
    let bottom_right = rect.right_bottom();

    segments_intersect(start, end, top_left, top_right)
        || segments_intersect(start, end, top_right, bottom_right)
        || segments_intersect(start, end, bottom_right, bottom_left)
        || segments_intersect(start, end, bottom_left, top_left)
}

fn segments_intersect(a1: Pos2, a2: Pos2, b1: Pos2, b2: Pos2) -> bool {
    fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
        let oa = a - o;
        let ob = b - o;
        (oa.x * ob.y) - (oa.y * ob.x)
    }

    let c1 = cross(a1, a2, b1);
    let c2 = cross(a1, a2, b2);
    let c3 = cross(b1, b2, a1);
    let c4 = cross(b1, b2, a2);

    (c1 <= 0.0 && c2 >= 0.0 || c1 >= 0.0 && c2 <= 0.0)
        && (c3 <= 0.0 && c4 >= 0.0 || c3 >= 0.0 && c4 <= 0.0)
}

pub(super) fn draw_glow(painter: &Painter, center: Pos2, radius: f32, color: Color32, strength: f32) {
    for (scale, alpha) in [(3.2, 0.06), (2.2, 0.12), (1.5, 0.22)] {
        painter.circle_filled(center, radius * scale, with_alpha(color, alpha * strength));
    }
}

pub(super) fn draw_brand_mark(ui: &mut Ui, radius: f32) {
    let (rect, _response) = ui.allocate_exact_size(vec2(radius * 2.0, radius * 2.0), Sense::hover());
    let painter = ui.painter_at(rect.expand(radius));
    let center = rect.center();

    draw_glow(&painter, center, radius * 0.7, BRAND_PURPLE, 1.0);
    painter.circle_filled(center, radius, BRAND_PURPLE);

    let s = radius * 0.5;
    let body = vec![
        center + vec2(0.0, -s * 1.1),
        center + vec2(s * 0.45, s * 0.35),
        center + vec2(0.0, s * 0.7),
        center + vec2(-s * 0.45, s * 0.35),
    ];
    painter.add(Shape::convex_polygon(body, Color32::WHITE, Stroke::NONE));
    painter.circle_filled(center + vec2(0.0, -s * 0.2), s * 0.18, BRAND_PURPLE);
    painter.line_segment(
        [center + vec2(-s * 0.5, s * 0.9), center + vec2(-s * 0.2, s * 0.5)],
        Stroke::new(1.5, BRAND_LIGHT),
    );
    painter.line_segment(
        [center + vec2(s * 0.5, s * 0.9), center + vec2(s * 0.2, s * 0.5)],
        Stroke::new(1.5, BRAND_LIGHT),
    );
}
