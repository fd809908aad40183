//! Simulation state
//!
//! The controller owns every body and both paddles outright; nothing holds a
//! reference back into it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::color::Color;
use super::input::KeyState;
use super::paddle::Paddle;
use crate::config::{Config, PaddleCadence};

/// Lifecycle of the controller. There is no terminal phase: the loop runs
/// until the host stops scheduling frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, bodies not spawned yet
    Uninitialized,
    /// Bodies spawned, ticking every frame
    Running,
}

/// Playfield bounds in pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub config: Config,
    pub playfield: Playfield,
    pub phase: Phase,
    /// Frames ticked since the last `initialize`
    pub frame: u64,
    /// Bodies in spawn order (index decides palette color)
    pub bodies: Vec<Body>,
    /// Left paddle, driven by the keyboard
    pub player: Paddle,
    /// Right paddle, oscillates on its own
    pub autopilot: Paddle,
    pub keys: KeyState,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Create an uninitialized state; call [`SimState::initialize`] to spawn bodies
    pub fn new(config: Config, seed: u64) -> Self {
        let playfield = config.playfield();
        Self {
            seed,
            player: Paddle::player(&playfield, &config.player),
            autopilot: Paddle::autopilot(&playfield, &config.autopilot),
            config,
            playfield,
            phase: Phase::Uninitialized,
            frame: 0,
            bodies: Vec::new(),
            keys: KeyState::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn bodies, reset paddles and release all keys.
    ///
    /// Paddle geometry is identical on every call; bodies are re-rolled from
    /// the running RNG, so repeated calls produce different bodies.
    pub fn initialize(&mut self) {
        let playfield = self.playfield;
        self.bodies = (0..self.config.body_count)
            .map(|i| Body::spawn(&mut self.rng, &playfield, Color::for_body(i)))
            .collect();
        self.player = Paddle::player(&playfield, &self.config.player);
        self.autopilot = Paddle::autopilot(&playfield, &self.config.autopilot);
        self.keys.clear();
        self.frame = 0;
        self.phase = Phase::Running;

        log::info!(
            "Simulation initialized: {} bodies on {}x{} (seed {})",
            self.bodies.len(),
            playfield.width,
            playfield.height,
            self.seed
        );
    }

    /// How many times each paddle is stepped per frame.
    ///
    /// With the default per-body cadence this equals the body count, so the
    /// autopilot paddle's effective speed scales with the number of bodies.
    pub fn paddle_steps_per_frame(&self) -> usize {
        match self.config.paddle_cadence {
            PaddleCadence::PerBody => self.bodies.len(),
            PaddleCadence::PerFrame => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BALL_PALETTE;

    #[test]
    fn test_new_is_uninitialized() {
        let state = SimState::new(Config::default(), 1);
        assert_eq!(state.phase, Phase::Uninitialized);
        assert!(state.bodies.is_empty());
        assert_eq!(state.player.pos, Vec2::new(0.0, 180.0));
    }

    #[test]
    fn test_initialize_spawns_palette_bodies_at_center() {
        let mut state = SimState::new(Config::default(), 12345);
        state.initialize();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.bodies.len(), 5);
        for (body, color) in state.bodies.iter().zip(BALL_PALETTE) {
            assert_eq!(body.color, color);
            assert_eq!(body.pos, Vec2::new(400.0, 300.0));
        }
    }

    #[test]
    fn test_initialize_resets_paddles_and_keys() {
        let mut state = SimState::new(Config::default(), 3);
        state.initialize();
        state.player.pos.y = 10.0;
        state.autopilot.pos.y = 5.0;
        state.keys.key_down("ArrowUp");
        state.frame = 77;

        state.initialize();
        assert_eq!(state.player.pos.y, 180.0);
        assert_eq!(state.autopilot.pos.y, 270.0);
        assert!(!state.keys.is_pressed("ArrowUp"));
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_reinitialize_rerolls_bodies() {
        let mut state = SimState::new(Config::default(), 99);
        state.initialize();
        let first: Vec<Vec2> = state.bodies.iter().map(|b| b.vel).collect();
        state.initialize();
        let second: Vec<Vec2> = state.bodies.iter().map(|b| b.vel).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_same_bodies() {
        let mut a = SimState::new(Config::default(), 2024);
        let mut b = SimState::new(Config::default(), 2024);
        a.initialize();
        b.initialize();
        assert_eq!(a.bodies, b.bodies);
    }

    #[test]
    fn test_paddle_steps_per_frame() {
        let mut state = SimState::new(Config::default(), 1);
        state.initialize();
        assert_eq!(state.paddle_steps_per_frame(), 5);
        state.config.paddle_cadence = PaddleCadence::PerFrame;
        assert_eq!(state.paddle_steps_per_frame(), 1);
    }
}
