//! Outline generation for debug overlay primitives

use glam::Vec2;
use std::f32::consts::PI;

/// Points around a circle, counter-clockwise from +x
pub fn circle_outline(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(3);
    let mut points = Vec::with_capacity(segments as usize);

    for i in 0..segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        points.push(Vec2::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
        ));
    }

    points
}

/// Corners of an axis-aligned rectangle, counter-clockwise from bottom-left
pub fn rect_outline(center: Vec2, size: Vec2) -> Vec<Vec2> {
    let half = size / 2.0;
    vec![
        Vec2::new(center.x - half.x, center.y - half.y),
        Vec2::new(center.x + half.x, center.y - half.y),
        Vec2::new(center.x + half.x, center.y + half.y),
        Vec2::new(center.x - half.x, center.y + half.y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_points_on_radius() {
        let center = Vec2::new(3.0, -2.0);
        let points = circle_outline(center, 5.0, 16);
        assert_eq!(points.len(), 16);
        for p in points {
            assert!((p.distance(center) - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_circle_minimum_segments() {
        assert_eq!(circle_outline(Vec2::ZERO, 1.0, 0).len(), 3);
    }

    #[test]
    fn test_rect_corners() {
        let points = rect_outline(Vec2::new(10.0, 0.0), Vec2::new(4.0, 2.0));
        assert_eq!(points[0], Vec2::new(8.0, -1.0));
        assert_eq!(points[2], Vec2::new(12.0, 1.0));
    }
}
