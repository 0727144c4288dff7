use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GameRng, OpponentBrain, Score};
use hecs::World;

/// Detect the ball crossing a goal line, award the point, and start the
/// next round: fresh rightward serve at base speed, opponent forced to
/// re-predict.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    brain: &mut OpponentBrain,
    rng: &mut GameRng,
) {
    let center = config.field_center();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x + ball.radius >= config.field_width {
            score.increment_left();
            events.left_scored = true;
            ball.serve(center, config.ball_base_speed, rng);
            brain.retarget = true;
        } else if ball.pos.x - ball.radius <= 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.serve(center, config.ball_base_speed, rng);
            brain.retarget = true;
        }
    }
}
