use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::{SpeedRecord, Time};
use hecs::World;

/// Advance every paddle along its versor. Each axis of the candidate
/// position is applied only if the full rectangle stays on the field; a
/// violating axis simply does not move this frame.
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let delta = paddle.dir.normalize_or_zero() * paddle.speed * time.dt;
        let candidate = paddle.pos + delta;

        if candidate.y >= 0.0 && candidate.y + paddle.size.y <= config.field_height {
            paddle.pos.y = candidate.y;
        }
        if candidate.x >= 0.0 && candidate.x + paddle.size.x <= config.field_width {
            paddle.pos.x = candidate.x;
        }
    }
}

/// Advance the ball. No clamping: overshoot past the left or right edge is
/// exactly what the scoring check looks for on the next frame. The stored
/// direction stays raw; only the copy used for displacement is normalized.
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.dir.normalize_or_zero() * ball.speed * time.dt;
    }
}

/// Fold the current ball speed into the running record
pub fn observe_ball_speed(world: &mut World, record: &mut SpeedRecord) {
    for (_entity, ball) in world.query_mut::<&Ball>() {
        record.observe(ball.speed);
    }
}
