//! Rendering
//!
//! The simulation draws through the [`Canvas`] trait. [`VertexBatch`]
//! tessellates those calls into triangles and [`RenderState`] presents them
//! with WebGPU.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::VertexBatch;
pub use pipeline::RenderState;
pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::{Color, SimState};

/// A 2D drawing surface addressed in playfield pixels, origin top-left
pub trait Canvas {
    /// Drawable width and height
    fn size(&self) -> Vec2;

    /// Called once before a frame is drawn
    fn begin_frame(&mut self) {}

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Draw one frame: background, then bodies, then the player and autopilot
/// paddles. Later draws cover earlier ones.
pub fn draw_scene<C: Canvas + ?Sized>(state: &SimState, canvas: &mut C) {
    canvas.begin_frame();

    let size = canvas.size();
    canvas.fill_rect(Vec2::ZERO, size, state.config.background);

    for body in &state.bodies {
        body.render(canvas);
    }
    state.player.render(canvas);
    state.autopilot.render(canvas);
}
