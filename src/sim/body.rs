//! Moving bodies (the balls)

use glam::Vec2;
use rand::Rng;

use super::color::Color;
use super::state::Playfield;
use crate::consts::*;
use crate::renderer::Canvas;

/// A circular body bouncing around the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Body {
    /// Spawn a body at the playfield center with a random radius and velocity
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, playfield: &Playfield, color: Color) -> Self {
        let radius = random_radius(rng);
        let vel = random_velocity(rng);
        Self {
            pos: playfield.center(),
            vel,
            radius,
            color,
        }
    }

    /// Advance one frame.
    ///
    /// Bounces off the top/bottom edges by flipping `vel.y` (no position
    /// correction, so the body may overlap a wall for a frame). Leaving
    /// through the left/right edges respawns the body at the center with a
    /// fresh velocity. The vertical test runs first; a respawn overwrites
    /// whatever the bounce did.
    pub fn integrate<R: Rng + ?Sized>(&mut self, playfield: &Playfield, rng: &mut R) {
        self.pos += self.vel;

        if self.top() <= 0.0 || self.bottom() >= playfield.height {
            self.vel.y = -self.vel.y;
        }

        if self.left() <= 0.0 || self.right() >= playfield.width {
            self.respawn(playfield, rng);
        }
    }

    /// Reset to the playfield center with a new random velocity
    pub fn respawn<R: Rng + ?Sized>(&mut self, playfield: &Playfield, rng: &mut R) {
        log::trace!(
            "{:?} body left the playfield at ({:.1}, {:.1}), respawning",
            self.color,
            self.pos.x,
            self.pos.y
        );
        self.pos = playfield.center();
        self.vel = random_velocity(rng);
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_circle(self.pos, self.radius, self.color);
    }
}

/// Draw a velocity with each axis in `[BODY_SPEED_MIN, BODY_SPEED_MAX)` and a random sign
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(random_axis_speed(rng), random_axis_speed(rng))
}

fn random_axis_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let magnitude = rng.random_range(BODY_SPEED_MIN..BODY_SPEED_MAX);
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Pick the small or large band with equal odds, then a whole-pixel radius within it
pub fn random_radius<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let radius = if rng.random_bool(0.5) {
        rng.random_range(SMALL_RADIUS_MIN..SMALL_RADIUS_MAX)
    } else {
        rng.random_range(LARGE_RADIUS_MIN..LARGE_RADIUS_MAX)
    };
    radius as f32
}
