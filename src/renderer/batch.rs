//! CPU-side vertex batch implementing [`Canvas`]

use glam::Vec2;

use super::Canvas;
use super::shapes;
use super::vertex::Vertex;
use crate::sim::Color;

/// Collects one frame of geometry in draw order
#[derive(Debug, Clone)]
pub struct VertexBatch {
    size: Vec2,
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Canvas for VertexBatch {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn begin_frame(&mut self) {
        self.vertices.clear();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.vertices
            .extend(shapes::rect(origin, size, color.rgba()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color.rgba(), segments));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::renderer::draw_scene;
    use crate::sim::SimState;

    #[test]
    fn test_batch_collects_in_draw_order() {
        let mut batch = VertexBatch::new(Vec2::new(800.0, 600.0));
        batch.fill_rect(Vec2::ZERO, Vec2::new(800.0, 600.0), Color::Charcoal);
        batch.fill_circle(Vec2::new(100.0, 100.0), 5.0, Color::Red);
        assert_eq!(batch.len(), 6 + 12 * 3);
        assert_eq!(batch.vertices()[0].color, Color::Charcoal.rgba());
        assert_eq!(batch.vertices()[6].color, Color::Red.rgba());
    }

    #[test]
    fn test_each_frame_starts_empty() {
        let mut state = SimState::new(Config::default(), 4);
        state.initialize();
        let mut batch = VertexBatch::new(state.playfield.size());

        draw_scene(&state, &mut batch);
        let first = batch.len();
        draw_scene(&state, &mut batch);
        assert_eq!(batch.len(), first);
        assert!(!batch.is_empty());
        // Paddles are the last two rectangles
        let tail = &batch.vertices()[first - 12..];
        assert!(tail[..6].iter().all(|v| v.color == Color::Green.rgba()));
        assert!(tail[6..].iter().all(|v| v.color == Color::Red.rgba()));
    }
}
