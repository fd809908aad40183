//! Per-frame simulation tick
//!
//! One call advances the simulation by exactly one animation frame.

use super::collision::resolve_paddle_hits;
use super::input::{KEY_DOWN, KEY_UP, KeyState};
use super::paddle::{Direction, Paddle};
use super::state::{Phase, Playfield, SimState};
use crate::config::PaddleCadence;

/// Advance the simulation by one frame.
///
/// Bodies are processed in index order. For each body: integrate, step the
/// paddles, then test it against both paddles. With the default per-body
/// cadence the paddles are stepped once per body, not once per frame.
pub fn tick(state: &mut SimState) {
    // Nothing spawned yet
    if state.phase == Phase::Uninitialized {
        return;
    }

    state.frame += 1;

    let playfield = state.playfield;
    let per_body = state.config.paddle_cadence == PaddleCadence::PerBody;
    let SimState {
        bodies,
        player,
        autopilot,
        keys,
        rng,
        ..
    } = state;

    for (index, body) in bodies.iter_mut().enumerate() {
        body.integrate(&playfield, rng);

        if per_body || index == 0 {
            step_paddles(player, autopilot, keys, &playfield);
        }

        resolve_paddle_hits(body, player, autopilot);
    }

    if !per_body && bodies.is_empty() {
        step_paddles(player, autopilot, keys, &playfield);
    }
}

/// Apply held keys to the player paddle, then step the autopilot.
///
/// Up is applied before down. With both held the two steps mostly cancel,
/// but at the top edge the declined up-step leaves only the down-step, so
/// down wins.
fn step_paddles(player: &mut Paddle, autopilot: &mut Paddle, keys: &KeyState, playfield: &Playfield) {
    if keys.is_pressed(KEY_UP) {
        player.move_manual(Direction::Up, playfield);
    }
    if keys.is_pressed(KEY_DOWN) {
        player.move_manual(Direction::Down, playfield);
    }
    autopilot.move_autonomous(playfield);
}
