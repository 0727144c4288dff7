use crate::components::Side;
use glam::Vec2;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 450.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0;
    pub const PADDLE_INSET: f32 = 50.0;

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_BASE_SPEED: f32 = 400.0;
    pub const BALL_SPEED_GAIN: f32 = 20.0;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_speed_gain: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            ball_speed_gain: Params::BALL_SPEED_GAIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left corner a paddle starts at (and returns to on game reset)
    pub fn paddle_origin(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset,
        };
        Vec2::new(x, (self.field_height - self.paddle_height) / 2.0)
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
