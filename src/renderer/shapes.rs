//! Triangle tessellation for filled 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segment count for a circle: more for larger radii, never fewer than 12
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 1.5).ceil() as u32).clamp(12, 64)
}

/// Generate vertices for a filled circle (triangle fan as a list)
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let a = Vec2::from_angle(i as f32 / segments as f32 * TAU) * radius;
        let b = Vec2::from_angle((i + 1) as f32 / segments as f32 * TAU) * radius;

        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + a, color));
        vertices.push(Vertex::at(center + b, color));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let top_left = origin;
    let top_right = origin + Vec2::new(size.x, 0.0);
    let bottom_left = origin + Vec2::new(0.0, size.y);
    let bottom_right = origin + size;

    vec![
        Vertex::at(top_left, color),
        Vertex::at(bottom_left, color),
        Vertex::at(top_right, color),
        Vertex::at(top_right, color),
        Vertex::at(bottom_left, color),
        Vertex::at(bottom_right, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertices_on_rim() {
        let center = Vec2::new(50.0, 40.0);
        let verts = circle(center, 10.0, WHITE, 16);
        assert_eq!(verts.len(), 48);
        for tri in verts.chunks(3) {
            assert_eq!(tri[0].pos(), center);
            assert!((tri[1].pos().distance(center) - 10.0).abs() < 1e-3);
            assert!((tri[2].pos().distance(center) - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), WHITE);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_circle_segments_bounds() {
        assert_eq!(circle_segments(3.0), 12);
        assert_eq!(circle_segments(20.0), 30);
        assert_eq!(circle_segments(500.0), 64);
    }
}
