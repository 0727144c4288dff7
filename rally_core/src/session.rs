use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, KeyPriority, OpponentBrain, Score, SpeedRecord, Time};
use crate::services::{effect, play_effect, AudioBackend, Canvas, Color, InputSource, Key};
use crate::systems::apply_player_input;
use crate::{advance, reset_game, spawn_ball, spawn_paddles};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Formatted HUD lines, rebuilt after every frame so the renderer only has
/// to rasterize
#[derive(Debug, Clone)]
pub struct Hud {
    pub score_line: String,
    pub speed_line: String,
    pub record_line: String,
    pub reset_hint: String,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score_line: String::new(),
            speed_line: String::new(),
            record_line: String::new(),
            reset_hint: "Press 'R' to Restart the Game".to_string(),
        }
    }
}

/// One running match. Owns the world and every cross-frame resource; a
/// frame is input, then resolution and motion, then audio routing. Drawing
/// is a separate read-only pass.
pub struct Session {
    pub world: World,
    pub config: Config,
    pub time: Time,
    pub score: Score,
    pub record: SpeedRecord,
    pub events: Events,
    pub brain: OpponentBrain,
    pub keys: KeyPriority,
    pub rng: GameRng,
    pub hud: Hud,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        spawn_paddles(&mut world, &config);
        spawn_ball(&mut world, &config, &mut rng);

        let mut session = Self {
            world,
            config,
            time: Time::default(),
            score: Score::new(),
            record: SpeedRecord::new(),
            events: Events::new(),
            brain: OpponentBrain {
                retarget: true,
                ..Default::default()
            },
            keys: KeyPriority::default(),
            rng,
            hud: Hud::default(),
        };
        session.refresh_hud();
        session
    }

    /// Run one frame up to, but not including, drawing
    pub fn frame(&mut self, input: &dyn InputSource, audio: &mut dyn AudioBackend, dt: f32) {
        self.time.dt = dt;

        if input.just_pressed(Key::Reset) {
            reset_game(
                &mut self.world,
                &self.config,
                &mut self.score,
                &mut self.record,
                &mut self.brain,
                &mut self.rng,
            );
        }
        apply_player_input(&mut self.world, input, &mut self.keys);

        advance(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.brain,
            &mut self.record,
            &mut self.rng,
        );

        self.refresh_hud();
        self.route_audio(audio);
        audio.tick_music();
    }

    /// Draw pass: entities, then the HUD. The shell clears to black first.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            canvas.fill_rect(paddle.pos, paddle.size, Color::WHITE);
        }
        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            canvas.fill_circle(ball.pos, ball.radius, Color::WHITE);
        }

        self.text_centered(canvas, &self.hud.score_line, 20.0, 30, Color::WHITE);
        self.text_centered(canvas, &self.hud.speed_line, 50.0, 20, Color::LIGHT_GRAY);
        self.text_centered(canvas, &self.hud.record_line, 80.0, 10, Color::LIGHT_GRAY);
        self.text_centered(
            canvas,
            &self.hud.reset_hint,
            self.config.field_height - 30.0,
            10,
            Color::LIGHT_GRAY,
        );
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    fn route_audio(&mut self, audio: &mut dyn AudioBackend) {
        if self.events.player_hit {
            play_effect(audio, effect::PLAYER_HIT);
        }
        if self.events.opponent_hit {
            play_effect(audio, effect::OPPONENT_HIT);
        }
        if self.events.left_scored || self.events.right_scored {
            let variant = self.rng.0.gen_range(0..effect::SCORE_VARIANTS);
            play_effect(audio, effect::SCORE_BASE + variant);
        }
    }

    fn refresh_hud(&mut self) {
        let speed = self.ball().map(|ball| ball.speed).unwrap_or(0.0);
        self.hud.score_line = format!("{} - {}", self.score.left, self.score.right);
        self.hud.speed_line = format!("Speed: {}", speed as i32);
        self.hud.record_line = format!("Speed Record: {}", self.record.top as i32);
    }

    fn text_centered(
        &self,
        canvas: &mut dyn Canvas,
        content: &str,
        y: f32,
        font_size: i32,
        color: Color,
    ) {
        let x = (self.config.field_width - canvas.text_width(content, font_size)) / 2.0;
        canvas.text(content, Vec2::new(x, y), font_size, color);
    }
}
