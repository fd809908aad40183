//! Rectangular paddles confined to the playfield's vertical extent

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::state::Playfield;
use crate::config::PaddleSpec;
use crate::renderer::Canvas;

/// Vertical travel direction (screen coordinates: up is -y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// -1 for up, +1 for down
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// A paddle, either player-driven or self-driven
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (fixed for the paddle's lifetime)
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
    /// Travel direction for autonomous movement
    pub direction: Direction,
}

impl Paddle {
    pub fn new(pos: Vec2, spec: &PaddleSpec) -> Self {
        Self {
            pos,
            size: Vec2::new(spec.width, spec.height),
            speed: spec.speed,
            color: spec.color,
            direction: Direction::Down,
        }
    }

    /// Player paddle: flush with the left edge, top edge `offset` above center
    pub fn player(playfield: &Playfield, spec: &PaddleSpec) -> Self {
        let pos = Vec2::new(0.0, Self::spawn_y(playfield, spec));
        Self::new(pos, spec)
    }

    /// Autopilot paddle: flush with the right edge
    pub fn autopilot(playfield: &Playfield, spec: &PaddleSpec) -> Self {
        let pos = Vec2::new(
            (playfield.width - spec.width).max(0.0),
            Self::spawn_y(playfield, spec),
        );
        Self::new(pos, spec)
    }

    /// `offset` above center, kept within `[0, H - height]`
    fn spawn_y(playfield: &Playfield, spec: &PaddleSpec) -> f32 {
        let max_y = (playfield.height - spec.height).max(0.0);
        (playfield.height / 2.0 - spec.offset).clamp(0.0, max_y)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Whether `y` lies within the paddle's vertical span (edges inclusive)
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.top() && y <= self.bottom()
    }

    /// Move one step on command.
    ///
    /// The bound is checked before moving: a step that would leave
    /// `[0, H - height]` is dropped, not clamped to the edge.
    /// Returns whether the paddle moved.
    pub fn move_manual(&mut self, direction: Direction, playfield: &Playfield) -> bool {
        let y = self.pos.y + self.speed * direction.sign();
        if y < 0.0 || y + self.size.y > playfield.height {
            return false;
        }
        self.pos.y = y;
        true
    }

    /// Step in the current direction, reversing once an edge is reached.
    ///
    /// The move always applies; the paddle may touch or slightly cross an
    /// edge for one step before heading back.
    pub fn move_autonomous(&mut self, playfield: &Playfield) {
        self.pos.y += self.speed * self.direction.sign();

        if self.top() <= 0.0 || self.bottom() >= playfield.height {
            self.direction = self.direction.reversed();
        }
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_rect(self.pos, self.size, self.color);
    }
}
