pub mod bounds;
pub mod components;
pub mod config;
pub mod predict;
pub mod resources;
pub mod services;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use predict::*;
pub use resources::*;
pub use services::*;
pub use session::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the simulation by one frame. Resolution runs before motion:
/// contacts and goals are judged on where the ball ended last frame, the
/// opponent reacts, and only then does anything move. Delta time is taken
/// as-is; a large spike can carry the ball across a paddle in one step.
#[allow(clippy::too_many_arguments)]
pub fn advance(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    brain: &mut OpponentBrain,
    record: &mut SpeedRecord,
    rng: &mut GameRng,
) {
    events.clear();

    // 1. Resolve ball contacts, player paddle first
    check_paddle_collisions(world, config, events);
    check_wall_collision(world, config, events);

    // 2. Goals and the round reset they trigger
    check_scoring(world, config, score, events, brain, rng);

    // 3. Opponent picks its aim for this frame
    drive_opponent(world, config, brain);

    // 4. Motion
    move_paddles(world, time, config);
    move_ball(world, time);

    observe_ball_speed(world, record);
    time.now += time.dt;
}

/// Spawn both paddles at their starting positions
pub fn spawn_paddles(world: &mut World, config: &Config) {
    for side in [Side::Left, Side::Right] {
        world.spawn((Paddle::new(
            side,
            config.paddle_origin(side),
            config.paddle_size(),
            config.paddle_speed,
        ),));
    }
}

/// Spawn the ball mid-field with an opening serve
pub fn spawn_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    let mut ball = Ball::new(
        config.field_center(),
        Vec2::X,
        config.ball_base_speed,
        config.ball_radius,
    );
    ball.serve(config.field_center(), config.ball_base_speed, rng);
    world.spawn((ball,))
}

/// Full game reset: paddles re-centered, fresh serve, scores and the speed
/// record zeroed, opponent forced to re-predict.
pub fn reset_game(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    record: &mut SpeedRecord,
    brain: &mut OpponentBrain,
    rng: &mut GameRng,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos = config.paddle_origin(paddle.side);
        paddle.dir = Vec2::ZERO;
    }

    let center = config.field_center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(center, config.ball_base_speed, rng);
    }

    score.reset();
    record.reset();
    brain.retarget = true;
}
