use glam::Vec2;

/// Logical input signals the shell polls on the core's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Reset,
}

/// Key-state queries provided by the windowing shell
pub trait InputSource {
    fn is_down(&self, key: Key) -> bool;
    fn just_pressed(&self, key: Key) -> bool;
}

/// Fire-and-forget sound playback provided by the audio shell
pub trait AudioBackend {
    /// Trigger the effect loaded in `slot`
    fn play(&mut self, slot: usize);
    /// Keep the looping background stream fed; called once per frame
    fn tick_music(&mut self);
}

/// Rgba color handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    pub const LIGHT_GRAY: Color = Color {
        r: 200,
        g: 200,
        b: 200,
        a: 255,
    };
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
}

/// Draw primitives provided by the rendering shell. The core supplies all
/// geometry, strings, and colors; the shell only rasterizes.
pub trait Canvas {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn text(&mut self, content: &str, pos: Vec2, font_size: i32, color: Color);
    fn text_width(&self, content: &str, font_size: i32) -> f32;
}

/// Effect slot layout the audio shell is expected to load
pub mod effect {
    pub const PLAYER_HIT: usize = 0;
    pub const OPPONENT_HIT: usize = 1;
    /// First of two interchangeable scoring stings
    pub const SCORE_BASE: usize = 2;
    pub const SCORE_VARIANTS: usize = 2;

    pub(crate) const SLOT_COUNT: usize = SCORE_BASE + SCORE_VARIANTS;
}

/// Route an effect trigger to the backend. An out-of-range slot is reported
/// and dropped; the match keeps running.
pub fn play_effect(audio: &mut dyn AudioBackend, slot: usize) {
    if slot < effect::SLOT_COUNT {
        audio.play(slot);
    } else {
        log::warn!("sound effect slot out of range: {slot}");
    }
}
