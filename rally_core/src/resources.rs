/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Running maximum of ball speed across the session. Monotone until an
/// explicit reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedRecord {
    pub top: f32,
}

impl SpeedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, speed: f32) {
        if speed > self.top {
            self.top = speed;
        }
    }

    pub fn reset(&mut self) {
        self.top = 0.0;
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_hit: bool,
    pub opponent_hit: bool,
    pub wall_hit: bool,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Cached aim state for the opponent controller. The intercept is solved
/// once, when the ball turns toward the opponent, and held for the rest of
/// the approach. `retarget` forces a fresh solve on the next frame
/// (set by round and game resets).
#[derive(Debug, Clone, Copy, Default)]
pub struct OpponentBrain {
    pub target_y: f32,
    pub ball_moving_right: bool,
    pub retarget: bool,
}

/// Vertical movement keys that can contend for the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalKey {
    Up,
    Down,
}

/// Remembered winner of simultaneous Up+Down holds. Holding both keys gives
/// control to the most recent press; releasing it hands control back to the
/// older one.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPriority {
    pub active: Option<VerticalKey>,
}
