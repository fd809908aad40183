//! Body-paddle collision tests
//!
//! Each paddle is only tested from the side facing the playfield: the
//! body's leading edge against the paddle's inner edge, with the body's
//! center inside the paddle's vertical span. There is no separation step,
//! so a body still overlapping on the next frame is flipped again.

use super::body::Body;
use super::paddle::Paddle;

/// Left paddle: body's left edge at or past the paddle's right edge
pub fn hits_left_paddle(body: &Body, paddle: &Paddle) -> bool {
    body.left() <= paddle.right() && paddle.spans_y(body.pos.y)
}

/// Right paddle: body's right edge at or past the paddle's left edge
pub fn hits_right_paddle(body: &Body, paddle: &Paddle) -> bool {
    body.right() >= paddle.left() && paddle.spans_y(body.pos.y)
}

/// Flip `vel.x` once per paddle hit. Returns the number of hits.
pub fn resolve_paddle_hits(body: &mut Body, left: &Paddle, right: &Paddle) -> u32 {
    let mut hits = 0;
    if hits_left_paddle(body, left) {
        body.vel.x = -body.vel.x;
        hits += 1;
    }
    if hits_right_paddle(body, right) {
        body.vel.x = -body.vel.x;
        hits += 1;
    }
    if hits > 0 {
        log::trace!("{:?} body hit {} paddle(s)", body.color, hits);
    }
    hits
}
