//! Scene state machine: startup menu, pause cards, and level scenes.
//!
//! Every scene exposes the same capability set — `handle`, `update`,
//! `render`, `first_render` — as one flat enum. [`Game`] owns the current
//! scene plus an optional requested successor and swaps them at a single
//! commit point per loop iteration, so a scene is always rendered fresh
//! before it sees input, and an `update` never observes a transition
//! requested by a different scene.

use std::io::{self, Write};

use rand::Rng;

use crate::audio::Cue;
use crate::compute::{self, Outcome};
use crate::config::GameConfig;
use crate::display;
use crate::entities::{LevelState, Mode, Rect};

// ── Input model ──────────────────────────────────────────────────────────────

/// A discrete input event, already translated from the backend event type.
/// An empty per-tick sequence is valid; events arrive in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    MouseButtonDown(i32, i32),
    MouseMotion(i32, i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Left,
    Right,
    Other,
}

/// What the outer loop should do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Terminate: no further update or render this tick.
    Quit,
}

// ── Scene variants ───────────────────────────────────────────────────────────

pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub mode: Mode,
}

/// The startup mode chooser.
pub struct MenuScene {
    pub buttons: [Button; 2],
    choice: Option<MenuChoice>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuChoice {
    Start(Mode),
    /// Clicked outside every button: re-request the menu itself.
    Stay,
}

/// A static card (mode info, level cleared, game over). Renders once, then
/// latches `finished` on the first key or mouse-button press — never on
/// mouse motion — and hands over to the next level.
pub struct PausedScene {
    pub lines: Vec<String>,
    pub show_splash: bool,
    pub finished: bool,
    pub next_mode: Mode,
    pub next_number: u32,
    pub next_score: u32,
}

pub enum Scene {
    Menu(MenuScene),
    Paused(PausedScene),
    Level(LevelState),
}

/// Result of one scene update: sound cues to fire and, possibly, the scene
/// that should take over at the next commit point.
pub struct SceneUpdate {
    pub cues: Vec<Cue>,
    pub next: Option<Scene>,
}

// ── Constructors ─────────────────────────────────────────────────────────────

impl Scene {
    pub fn startup_menu(cfg: &GameConfig) -> Scene {
        let (w, h) = (cfg.button_width, cfg.button_height);
        let y = cfg.height * 2 / 3;
        let buttons = [
            Button {
                rect: Rect::new(cfg.width / 4 - w / 2, y, w, h),
                label: "Banana Mode",
                mode: Mode::Dodge,
            },
            Button {
                rect: Rect::new(cfg.width * 3 / 4 - w / 2, y, w, h),
                label: "Basket Mode",
                mode: Mode::Catch,
            },
        ];
        Scene::Menu(MenuScene {
            buttons,
            choice: None,
        })
    }

    /// Welcome / how-to card shown before the first level of a mode.
    pub fn mode_info(mode: Mode) -> Scene {
        let lines: Vec<String> = match mode {
            Mode::Dodge => &[
                "Welcome to Squish,",
                "the game of Fruit Self-Defense",
                "",
                "You are a banana, trying to survive a course",
                "in self-defense against fruit, where the",
                "participants will \"defend\" themselves",
                "against you with a 16 ton weight.",
                "",
                "Click or press any key to start",
            ][..],
            Mode::Catch => &[
                "Welcome to Squish,",
                "the game of Egg Catcher",
                "",
                "You are a basket, catching eggs that are",
                "thrown from above. The objective is to catch",
                "as many eggs as possible without letting",
                "any fall to the ground.",
                "",
                "Click or press any key to start",
            ][..],
        }
        .iter()
        .map(|s| s.to_string())
        .collect();

        Scene::Paused(PausedScene {
            lines,
            show_splash: true,
            finished: false,
            next_mode: mode,
            next_number: 1,
            next_score: 0,
        })
    }

    pub fn level_cleared(mode: Mode, number: u32, score: u32) -> Scene {
        Scene::Paused(PausedScene {
            lines: vec![
                format!("Level {number} cleared"),
                "Click or press any key to start next level".to_string(),
            ],
            show_splash: false,
            finished: false,
            next_mode: mode,
            next_number: number + 1,
            next_score: score,
        })
    }

    pub fn game_over(mode: Mode) -> Scene {
        Scene::Paused(PausedScene {
            lines: vec![
                "Game Over".to_string(),
                "Click or press any key to restart, Esc to quit".to_string(),
            ],
            show_splash: false,
            finished: false,
            next_mode: mode,
            next_number: 1,
            next_score: 0,
        })
    }

    pub fn level(mode: Mode, number: u32, score: u32, cfg: &GameConfig, rng: &mut impl Rng) -> Scene {
        log::info!(
            "entering level {number} ({mode:?}) score={score} lives={}",
            cfg.lives
        );
        Scene::Level(compute::init_level(mode, number, score, cfg.lives, cfg, rng))
    }

    // ── Capability set ───────────────────────────────────────────────────────

    pub fn handle(&mut self, event: &InputEvent) -> Control {
        // Quitting works the same everywhere and is checked first.
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return Control::Quit,
            _ => {}
        }
        match self {
            Scene::Menu(menu) => {
                if let InputEvent::MouseButtonDown(x, y) = *event {
                    menu.choice = Some(
                        menu.buttons
                            .iter()
                            .find(|b| b.rect.contains(x, y))
                            .map(|b| MenuChoice::Start(b.mode))
                            .unwrap_or(MenuChoice::Stay),
                    );
                }
            }
            Scene::Paused(card) => {
                if matches!(
                    event,
                    InputEvent::KeyDown(_) | InputEvent::MouseButtonDown(..)
                ) {
                    card.finished = true;
                }
            }
            Scene::Level(state) => match *event {
                InputEvent::MouseMotion(x, _) => state.pointer_x = x,
                InputEvent::KeyDown(Key::Left) => {
                    state.pointer_x = state.pointer_x.saturating_sub(state.key_step)
                }
                InputEvent::KeyDown(Key::Right) => {
                    state.pointer_x = state.pointer_x.saturating_add(state.key_step)
                }
                _ => {}
            },
        }
        Control::Continue
    }

    pub fn update(&mut self, cfg: &GameConfig, rng: &mut impl Rng) -> SceneUpdate {
        match self {
            Scene::Menu(menu) => {
                let next = menu.choice.take().map(|choice| match choice {
                    MenuChoice::Start(mode) => Scene::mode_info(mode),
                    MenuChoice::Stay => Scene::startup_menu(cfg),
                });
                SceneUpdate {
                    cues: Vec::new(),
                    next,
                }
            }
            Scene::Paused(card) => {
                let next = card.finished.then(|| {
                    Scene::level(card.next_mode, card.next_number, card.next_score, cfg, rng)
                });
                SceneUpdate {
                    cues: Vec::new(),
                    next,
                }
            }
            Scene::Level(state) => {
                let fx = compute::level_tick(state, cfg, rng);
                let mut cues = Vec::new();
                if fx.crash {
                    cues.push(Cue::Crash);
                }
                let next = fx.outcome.map(|outcome| match outcome {
                    Outcome::Cleared { score } => {
                        cues.push(Cue::LevelUp);
                        Scene::level_cleared(state.mode, state.number, score)
                    }
                    Outcome::GameOver => {
                        cues.push(Cue::Fail);
                        Scene::game_over(state.mode)
                    }
                });
                SceneUpdate { cues, next }
            }
        }
    }

    /// One-time draw right after this scene becomes current.
    pub fn first_render<W: Write>(&self, out: &mut W, cfg: &GameConfig) -> io::Result<()> {
        match self {
            Scene::Menu(_) => display::draw_title_screen(out, cfg),
            Scene::Paused(card) => {
                display::draw_pause_card(out, &card.lines, card.show_splash, cfg)
            }
            Scene::Level(_) => display::clear_screen(out),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W, cfg: &GameConfig) -> io::Result<()> {
        match self {
            Scene::Menu(menu) => display::draw_menu_buttons(out, menu, cfg),
            // Pause cards draw once in `first_render` and then hold still.
            Scene::Paused(_) => Ok(()),
            Scene::Level(state) => display::draw_level(out, state, cfg),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Scene::Menu(_) => "startup-menu",
            Scene::Paused(_) => "pause-card",
            Scene::Level(_) => "level",
        }
    }
}

// ── Scene state machine ──────────────────────────────────────────────────────

pub struct Game {
    current: Scene,
    requested: Option<Scene>,
    fresh: bool,
}

impl Game {
    pub fn new(cfg: &GameConfig) -> Game {
        Game {
            current: Scene::startup_menu(cfg),
            requested: None,
            fresh: true,
        }
    }

    /// Commit a pending transition, if any. Returns true when the current
    /// scene has not been displayed yet and needs its one-time first render.
    /// Called at the top of each loop iteration, before input is delivered,
    /// so every scene is rendered fresh before it sees any events.
    pub fn commit_transition(&mut self) -> bool {
        if let Some(next) = self.requested.take() {
            log::debug!("scene transition: {} -> {}", self.current.name(), next.name());
            self.current = next;
            self.fresh = true;
        }
        std::mem::take(&mut self.fresh)
    }

    pub fn handle(&mut self, event: &InputEvent) -> Control {
        self.current.handle(event)
    }

    /// Update the active scene; a requested successor is held until the next
    /// `commit_transition` call, never swapped mid-tick.
    pub fn update(&mut self, cfg: &GameConfig, rng: &mut impl Rng) -> Vec<Cue> {
        let SceneUpdate { cues, next } = self.current.update(cfg, rng);
        if next.is_some() {
            self.requested = next;
        }
        cues
    }

    pub fn first_render<W: Write>(&self, out: &mut W, cfg: &GameConfig) -> io::Result<()> {
        self.current.first_render(out, cfg)
    }

    pub fn render<W: Write>(&self, out: &mut W, cfg: &GameConfig) -> io::Result<()> {
        self.current.render(out, cfg)
    }

    pub fn scene(&self) -> &Scene {
        &self.current
    }

    pub fn requested(&self) -> Option<&Scene> {
        self.requested.as_ref()
    }
}
