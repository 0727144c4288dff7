use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;
use hecs::World;

/// Resolve ball-paddle contact, player paddle first. A contact only counts
/// while the ball is travelling toward the paddle, so a single approach
/// flips the horizontal sign exactly once even if the shapes keep
/// overlapping for several frames.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| matches!(paddle.side, Side::Right));

    for paddle in paddles {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if !paddle.bounds().intersects_circle(ball.pos, ball.radius) {
                continue;
            }
            let moving_toward = match paddle.side {
                Side::Left => ball.dir.x < 0.0,
                Side::Right => ball.dir.x > 0.0,
            };
            if !moving_toward {
                continue;
            }

            ball.dir.x = -ball.dir.x;
            // Offset from paddle center, in half-heights. Not clamped: a
            // hit past the face edge leaves steeper than 45 degrees.
            ball.dir.y = (ball.pos.y - paddle.center().y) / paddle.half_height();
            // Compounding growth, scaled by impact steepness. A dead-center
            // hit adds nothing.
            ball.speed +=
                config.ball_speed_gain * (ball.speed / config.ball_base_speed) * ball.dir.y.abs();

            match paddle.side {
                Side::Left => events.player_hit = true,
                Side::Right => events.opponent_hit = true,
            }
        }
    }
}

/// Bounce the ball off the top and bottom field edges. Only a ball moving
/// into the wall bounces, so an overlap never re-triggers.
pub fn check_wall_collision(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let into_top = ball.pos.y - ball.radius <= 0.0 && ball.dir.y < 0.0;
        let into_bottom = ball.pos.y + ball.radius >= config.field_height && ball.dir.y > 0.0;

        if into_top || into_bottom {
            ball.dir.y = -ball.dir.y;
            events.wall_hit = true;
        }
    }
}
