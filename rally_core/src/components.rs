use crate::bounds::Aabb;
use crate::resources::GameRng;
use glam::Vec2;

/// Which side of the field a paddle defends. The left paddle is driven by
/// the player, the right one by the opponent controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - a top-left anchored rectangle driven by a direction
/// versor and a scalar speed
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub dir: Vec2,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            dir: Vec2::ZERO,
            speed,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }

    /// Point the movement versor at a target
    pub fn aim_at(&mut self, target: Vec2) {
        self.dir = (target - self.pos).normalize_or_zero();
    }
}

/// Ball component. Direction and speed are stored separately; the combined
/// vector is normalized at integration time, so `dir.y` may hold a raw
/// (non-unit) bounce angle between frames.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            dir,
            speed,
            radius,
        }
    }

    /// Re-pose at the field center with a fresh rightward serve at base speed
    pub fn serve(&mut self, center: Vec2, base_speed: f32, rng: &mut GameRng) {
        self.pos = center;
        self.dir = Vec2::new(1.0, serve_skew(rng));
        self.speed = base_speed;
    }
}

/// Random vertical serve component in [-1, 1], never exactly zero so the
/// ball cannot travel a pure horizontal line forever
fn serve_skew(rng: &mut GameRng) -> f32 {
    use rand::Rng;
    let skew = rng.0.gen_range(-1000..=1000) as f32 / 1000.0;
    if skew == 0.0 {
        -1.0
    } else {
        skew
    }
}
