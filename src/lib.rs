//! Bounce Pong - bouncing balls between two paddles
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (bodies, paddles, collisions)
//! - `renderer`: Drawing surface abstraction and WebGPU pipeline
//! - `platform`: Input events and frame scheduling
//! - `config`: Serializable run configuration

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Config, PaddleCadence, PaddleSpec};

/// Simulation configuration constants
///
/// Distances are playfield pixels, speeds are pixels per frame.
pub mod consts {
    /// Default playfield dimensions (used when no canvas dictates them)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Number of bodies in the playfield
    pub const BODY_COUNT: usize = 5;

    /// Respawn/launch speed band per axis: magnitude in [MIN, MAX)
    pub const BODY_SPEED_MIN: f32 = 2.0;
    pub const BODY_SPEED_MAX: f32 = 6.0;

    /// Small radius band (whole pixels, upper bound exclusive)
    pub const SMALL_RADIUS_MIN: u32 = 3;
    pub const SMALL_RADIUS_MAX: u32 = 8;
    /// Large radius band (whole pixels, upper bound exclusive)
    pub const LARGE_RADIUS_MIN: u32 = 10;
    pub const LARGE_RADIUS_MAX: u32 = 25;

    /// Player paddle - tall and slow, anchored to the left edge
    pub const PLAYER_PADDLE_WIDTH: f32 = 10.0;
    pub const PLAYER_PADDLE_HEIGHT: f32 = 240.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 0.7;
    /// Offset above the vertical center for the player paddle's top edge
    pub const PLAYER_PADDLE_OFFSET: f32 = 120.0;

    /// Autopilot paddle - shorter, slightly faster, anchored to the right edge
    pub const AUTOPILOT_PADDLE_WIDTH: f32 = 10.0;
    pub const AUTOPILOT_PADDLE_HEIGHT: f32 = 100.0;
    pub const AUTOPILOT_PADDLE_SPEED: f32 = 0.8;
    pub const AUTOPILOT_PADDLE_OFFSET: f32 = 30.0;

    /// Frames the native binary simulates before exiting
    pub const HEADLESS_FRAMES: u64 = 600;
}
