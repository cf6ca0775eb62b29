//! Static tunables, collected into one immutable value.
//!
//! Built once at process start (from the terminal size) and passed by
//! reference into every component that needs it — no ambient globals.
//! If the game feels too fast or too slow, the speed fields are the
//! ones to modify.

use crate::entities::Rect;

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Full screen size in terminal cells.
    pub width: i32,
    pub height: i32,
    /// Inset applied on all sides of the screen to form the movement area.
    pub margin: i32,

    // ── Behaviour ──
    /// Base drop distance per tick at level 1.
    pub drop_speed: i32,
    /// Added to the drop speed for each level above 1.
    pub speed_increase: i32,
    pub heavy_bias: i32,
    pub light_bias: i32,
    pub egg_bias: i32,
    /// Max extra rows above the playfield a reset weight starts at.
    pub weight_stagger: i32,
    /// Eggs spread over a much taller band so they arrive staggered.
    pub egg_stagger: i32,
    /// Entities to resolve per level, both modes.
    pub quota_per_level: u32,
    pub egg_count: usize,
    /// Lives at the start of a run (and after every restart).
    pub lives: u32,
    /// Pointer displacement per left/right key press.
    pub catcher_step: i32,

    // ── Collision padding: transparent sprite margin, in cells ──
    pub banana_pad_top: i32,
    pub banana_pad_side: i32,
    pub basket_pad_top: i32,
    pub basket_pad_side: i32,

    // ── Scoring ──
    pub score_for_heavy: u32,
    pub score_for_light: u32,

    // ── Presentation ──
    pub fps: u32,
    pub score_x: i32,
    pub score_y: i32,
    pub life_x: i32,
    pub life_y: i32,
    pub life_spacing: i32,
    pub button_width: i32,
    pub button_height: i32,
}

impl GameConfig {
    /// Build the configuration for a given screen size in cells.
    pub fn for_screen(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            margin: 2,
            drop_speed: 1,
            speed_increase: 1,
            heavy_bias: 2,
            light_bias: 1,
            egg_bias: 0,
            weight_stagger: 20,
            egg_stagger: 60,
            quota_per_level: 10,
            egg_count: 5,
            lives: 5,
            catcher_step: 3,
            banana_pad_top: 1,
            banana_pad_side: 2,
            basket_pad_top: 1,
            basket_pad_side: 2,
            score_for_heavy: 2,
            score_for_light: 1,
            fps: 15,
            score_x: 2,
            score_y: 0,
            life_x: width - 14,
            life_y: 0,
            life_spacing: 2,
            button_width: 16,
            button_height: 3,
        }
    }

    /// The screen inset by the margin: the area entities may occupy.
    pub fn playfield(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height).inset(self.margin)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_screen(80, 24)
    }
}
