//! Pure game-logic functions.
//!
//! Every function here mutates plain state and returns plain data. Side
//! effects are limited to the injected RNG, so callers control determinism
//! (tests run with a seeded `StdRng`). Sounds and scene changes are reported
//! back as [`TickEffects`] rather than performed here.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Catcher, Faller, FallerKind, LevelState, Mode, Rect};
use crate::sprites;

// ── Per-class tables ─────────────────────────────────────────────────────────

/// Lives lost when the catcher collides with a hazard of this class.
fn hit_cost(kind: FallerKind) -> u32 {
    match kind {
        FallerKind::HeavyWeight => 2,
        FallerKind::LightWeight => 1,
        FallerKind::Egg => 0,
    }
}

/// Score awarded when a hazard of this class lands un-touched (dodge mode).
fn landing_score(kind: FallerKind, cfg: &GameConfig) -> u32 {
    match kind {
        FallerKind::HeavyWeight => cfg.score_for_heavy,
        FallerKind::LightWeight => cfg.score_for_light,
        FallerKind::Egg => 0,
    }
}

fn drop_bias(kind: FallerKind, cfg: &GameConfig) -> i32 {
    match kind {
        FallerKind::HeavyWeight => cfg.heavy_bias,
        FallerKind::LightWeight => cfg.light_bias,
        FallerKind::Egg => cfg.egg_bias,
    }
}

fn stagger(kind: FallerKind, cfg: &GameConfig) -> i32 {
    match kind {
        FallerKind::Egg => cfg.egg_stagger,
        _ => cfg.weight_stagger,
    }
}

// ── Entity operations ────────────────────────────────────────────────────────

/// Move the faller just above the visible playfield at a random horizontal
/// position, with a random extra vertical offset so entities arrive spread
/// out. Does not touch the `landed` flag.
pub fn reset_faller(f: &mut Faller, area: &Rect, rng: &mut impl Rng) {
    let x = rng.gen_range(area.x..area.right());
    let lift = rng.gen_range(0..f.stagger.max(1));
    f.rect.set_midbottom(x, -lift);
}

/// Advance the faller one tick and recompute `landed`. The flag is derived
/// here and nowhere else.
pub fn update_faller(f: &mut Faller, area: &Rect) {
    f.rect.y += f.speed + f.bias;
    f.landed = f.rect.y >= area.bottom();
}

/// Track the pointer and keep the catcher inside the movement area.
pub fn update_catcher(c: &mut Catcher, pointer_x: i32, area: &Rect) {
    c.rect.set_center_x(pointer_x.clamp(area.x, area.right()));
    c.rect = c.rect.clamped_into(area);
}

/// Collision rule: sprite art carries transparent margin at the top and
/// sides that must not count as a hit/catch surface. Shrink the catcher's
/// rect by its paddings, re-anchor the shrunk rect's bottom to the catcher's
/// actual bottom (the usable catch line never moves), and test that against
/// the faller's full rect.
pub fn touches(c: &Catcher, f: &Faller) -> bool {
    let mut bounds = c.rect.shrunk(c.pad_side, c.pad_top);
    bounds.y = c.rect.bottom() - bounds.h;
    bounds.intersects(&f.rect)
}

// ── Level construction ───────────────────────────────────────────────────────

fn new_faller(kind: FallerKind, speed: i32, cfg: &GameConfig) -> Faller {
    let sprite = sprites::faller_sprite(kind);
    Faller {
        kind,
        rect: Rect::new(0, 0, sprite.width(), sprite.height()),
        speed,
        bias: drop_bias(kind, cfg),
        stagger: stagger(kind, cfg),
        landed: false,
    }
}

fn new_catcher(mode: Mode, cfg: &GameConfig, area: &Rect) -> Catcher {
    let sprite = sprites::catcher_sprite(mode);
    let (pad_top, pad_side) = match mode {
        Mode::Dodge => (cfg.banana_pad_top, cfg.banana_pad_side),
        Mode::Catch => (cfg.basket_pad_top, cfg.basket_pad_side),
    };
    let mut rect = Rect::new(0, 0, sprite.width(), sprite.height());
    rect.set_midbottom(cfg.width / 2, area.bottom());
    Catcher { rect, pad_top, pad_side }
}

/// Build the simulation state for one level. Score and mode carry forward
/// across levels; lives are whatever the caller passes (the configured
/// starting value on every construction in practice).
pub fn init_level(
    mode: Mode,
    number: u32,
    score: u32,
    lives: u32,
    cfg: &GameConfig,
    rng: &mut impl Rng,
) -> LevelState {
    let area = cfg.playfield();
    let speed = cfg.drop_speed + (number as i32 - 1) * cfg.speed_increase;

    let mut fallers = match mode {
        Mode::Dodge => vec![
            new_faller(FallerKind::HeavyWeight, speed, cfg),
            new_faller(FallerKind::LightWeight, speed, cfg),
        ],
        Mode::Catch => (0..cfg.egg_count)
            .map(|_| new_faller(FallerKind::Egg, speed, cfg))
            .collect(),
    };
    for f in &mut fallers {
        reset_faller(f, &area, rng);
    }

    LevelState {
        mode,
        number,
        score,
        lives,
        remaining: cfg.quota_per_level,
        catcher: new_catcher(mode, cfg, &area),
        area,
        fallers,
        pointer_x: cfg.width / 2,
        key_step: cfg.catcher_step,
    }
}

// ── Per-tick simulation ──────────────────────────────────────────────────────

/// What one tick produced besides state mutation: a crash cue to fire and,
/// possibly, the level's terminal outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickEffects {
    pub crash: bool,
    pub outcome: Option<Outcome>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Quota emptied. Carries the score at the moment it emptied; a catch
    /// later in the same tick still mutates the live score but not this.
    Cleared { score: u32 },
    GameOver,
}

/// Advance the simulation by one frame.
pub fn level_tick(state: &mut LevelState, cfg: &GameConfig, rng: &mut impl Rng) -> TickEffects {
    match state.mode {
        Mode::Dodge => dodge_tick(state, cfg, rng),
        Mode::Catch => catch_tick(state, rng),
    }
}

/// Dodge mode: the collision branch and the landed branch are mutually
/// exclusive within a tick — a weight that is simultaneously touching and
/// landed is a collision, never a scored landing.
fn dodge_tick(state: &mut LevelState, cfg: &GameConfig, rng: &mut impl Rng) -> TickEffects {
    let area = state.area;
    update_catcher(&mut state.catcher, state.pointer_x, &area);
    for f in &mut state.fallers {
        update_faller(f, &area);
    }

    let mut fx = TickEffects::default();
    if let Some(hit) = state.fallers.iter().position(|f| touches(&state.catcher, f)) {
        // Heavy sits first in the list, so it wins when both weights touch;
        // only the winning weight is resolved this tick.
        fx.crash = true;
        state.lives = state.lives.saturating_sub(hit_cost(state.fallers[hit].kind));
        reset_faller(&mut state.fallers[hit], &area, rng);
        if state.lives == 0 {
            fx.outcome = Some(Outcome::GameOver);
        }
    } else {
        for i in 0..state.fallers.len() {
            if state.fallers[i].landed {
                state.score += landing_score(state.fallers[i].kind, cfg);
                reset_faller(&mut state.fallers[i], &area, rng);
                state.remaining = state.remaining.saturating_sub(1);
            }
        }
        if state.remaining == 0 {
            fx.outcome = Some(Outcome::Cleared { score: state.score });
        }
    }
    fx
}

/// Catch mode: every egg gets its catch check and then its landed check,
/// in order, every tick. An emptied quota queues the clear but the per-egg
/// loop still finishes the tick; exhausted lives stop it immediately.
fn catch_tick(state: &mut LevelState, rng: &mut impl Rng) -> TickEffects {
    let area = state.area;
    update_catcher(&mut state.catcher, state.pointer_x, &area);
    for f in &mut state.fallers {
        update_faller(f, &area);
    }

    let mut fx = TickEffects::default();
    for i in 0..state.fallers.len() {
        if touches(&state.catcher, &state.fallers[i]) {
            state.score += 1;
            state.remaining = state.remaining.saturating_sub(1);
            reset_faller(&mut state.fallers[i], &area, rng);
            if state.remaining == 0 && fx.outcome.is_none() {
                fx.outcome = Some(Outcome::Cleared { score: state.score });
            }
        }
        if state.fallers[i].landed {
            fx.crash = true;
            state.lives = state.lives.saturating_sub(1);
            reset_faller(&mut state.fallers[i], &area, rng);
            if state.lives == 0 {
                // Game over beats a clear queued earlier this tick, and no
                // further score/remaining mutation may happen.
                fx.outcome = Some(Outcome::GameOver);
                break;
            }
        }
    }
    fx
}
