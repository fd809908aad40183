//! Deterministic simulation module
//!
//! All per-frame logic lives here:
//! - Frame-locked steps (speeds are pixels per frame)
//! - Seeded RNG only
//! - Stable iteration order (by body index)
//! - No platform dependencies; drawing goes through `renderer::Canvas`

pub mod body;
pub mod collision;
pub mod color;
pub mod input;
pub mod paddle;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{hits_left_paddle, hits_right_paddle, resolve_paddle_hits};
pub use color::{BALL_PALETTE, Color, srgb_to_linear};
pub use input::{KEY_DOWN, KEY_UP, KeyState};
pub use paddle::{Direction, Paddle};
pub use state::{Phase, Playfield, SimState};
pub use tick::tick;
