use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::predict::intercept_y;
use crate::resources::OpponentBrain;
use glam::Vec2;
use hecs::World;

/// Steer the opponent paddle. The intercept is solved once, on the frame
/// the ball turns toward the opponent (or when a reset forces it), and the
/// paddle chases that single aim point at its ordinary speed for the rest
/// of the approach. While the ball moves away, the paddle drifts back to
/// the vertical center of the field.
pub fn drive_opponent(world: &mut World, config: &Config, brain: &mut OpponentBrain) {
    let ball = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => *ball,
            None => return,
        }
    };
    let moving_right = ball.dir.x > 0.0;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        if brain.retarget || (moving_right && !brain.ball_moving_right) {
            // A horizontally dead ball has no solvable intercept; the
            // previous aim stands in that case.
            if let Some(y) = intercept_y(ball.pos, ball.dir, paddle.center().x, config.field_height)
            {
                brain.target_y = y - paddle.half_height();
            }
            brain.retarget = false;
        }

        if moving_right {
            paddle.aim_at(Vec2::new(paddle.pos.x, brain.target_y));
        } else {
            let rest_y = (config.field_height - paddle.size.y) / 2.0;
            paddle.aim_at(Vec2::new(paddle.pos.x, rest_y));
        }
    }

    brain.ball_moving_right = moving_right;
}
