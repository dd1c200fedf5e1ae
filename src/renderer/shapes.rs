//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::ui::Rect;

/// Two triangles covering four corners given in winding order
fn quad(corners: [Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = corners;
    [
        Vertex::at(a, color),
        Vertex::at(b, color),
        Vertex::at(c, color),
        Vertex::at(a, color),
        Vertex::at(c, color),
        Vertex::at(d, color),
    ]
}

/// Filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let tl = Vec2::new(r.x, r.y);
    let tr = Vec2::new(r.x + r.width, r.y);
    let br = Vec2::new(r.x + r.width, r.y + r.height);
    let bl = Vec2::new(r.x, r.y + r.height);
    quad([tl, tr, br, bl], color).to_vec()
}

/// Filled rectangle of `size` centered on `center`, turned counter-clockwise
/// on screen by `angle_deg`
pub fn rotated_rect(center: Vec2, size: Vec2, angle_deg: f32, color: [f32; 4]) -> Vec<Vertex> {
    // Screen y points down, so an on-screen CCW turn is a negative math angle
    let rot = Vec2::from_angle(-angle_deg.to_radians());
    let half = size / 2.0;
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + rot.rotate(c));
    quad(corners, color).to_vec()
}

/// Line segment with the given thickness (pixels)
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO || thickness <= 0.0 {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);
    quad([from + perp, to + perp, to - perp, from - perp], color).to_vec()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), RED);
        assert_eq!(v.len(), 6);
        assert!(v.iter().any(|v| v.pos() == Vec2::new(10.0, 20.0)));
        assert!(v.iter().any(|v| v.pos() == Vec2::new(40.0, 60.0)));
    }

    #[test]
    fn test_rotated_rect_quarter_turn() {
        // A tall 2x4 box turned 90 degrees becomes a wide 4x2 box
        let v = rotated_rect(Vec2::ZERO, Vec2::new(2.0, 4.0), 90.0, RED);
        for p in v.iter().map(Vertex::pos) {
            assert!((p.x.abs() - 2.0).abs() < 1e-5);
            assert!((p.y.abs() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_line_thickness() {
        let v = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 4.0, RED);
        assert_eq!(v.len(), 6);
        for p in v.iter().map(Vertex::pos) {
            assert!((p.y.abs() - 2.0).abs() < 1e-6);
        }
        assert!(line(Vec2::ONE, Vec2::ONE, 4.0, RED).is_empty());
    }

    #[test]
    fn test_circle_segments() {
        let v = circle(Vec2::new(5.0, 5.0), 5.0, RED, 16);
        assert_eq!(v.len(), 48);
        for p in v.iter().map(Vertex::pos) {
            assert!((p - Vec2::new(5.0, 5.0)).length() <= 5.0 + 1e-4);
        }
    }
}
