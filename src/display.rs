//! Rendering layer — all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! state it draws. No game logic is performed; this module only translates
//! state into terminal commands. The final `flush` is what makes a frame
//! visible.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::config::GameConfig;
use crate::entities::{FallerKind, LevelState, Mode};
use crate::scenes::MenuScene;
use crate::sprites::{self, Sprite};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SPLASH: Color = Color::Yellow;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HEAVY: Color = Color::Grey;
const C_LIGHT: Color = Color::DarkGrey;
const C_EGG: Color = Color::White;
const C_BANANA: Color = Color::Yellow;
const C_BASKET: Color = Color::DarkYellow;
const C_BTN_DODGE: Color = Color::DarkRed;
const C_BTN_CATCH: Color = Color::DarkGreen;
const C_BTN_LABEL: Color = Color::White;

// ── Shared helpers ────────────────────────────────────────────────────────────

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.flush()
}

/// Draw a sprite row by row, clipping anything outside the screen. Fallers
/// start above the visible area, so negative rows are routine.
fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    x: i32,
    y: i32,
    color: Color,
    cfg: &GameConfig,
) -> io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    for (dy, row) in sprite.rows.iter().enumerate() {
        let ry = y + dy as i32;
        if ry < 0 || ry >= cfg.height {
            continue;
        }
        let skip = (-x).max(0) as usize;
        let start = x + skip as i32;
        let visible: String = row
            .chars()
            .skip(skip)
            .take((cfg.width - start).max(0) as usize)
            .collect();
        if visible.is_empty() {
            continue;
        }
        out.queue(cursor::MoveTo(start as u16, ry as u16))?;
        out.queue(Print(visible))?;
    }
    Ok(())
}

fn draw_centered_lines<W: Write>(
    out: &mut W,
    lines: &[String],
    top: i32,
    cfg: &GameConfig,
) -> io::Result<()> {
    out.queue(style::SetForegroundColor(C_TEXT))?;
    for (i, line) in lines.iter().enumerate() {
        let row = top + i as i32;
        if row < 0 || row >= cfg.height || line.is_empty() {
            continue;
        }
        let col = (cfg.width / 2 - line.chars().count() as i32 / 2).max(0);
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

fn park_cursor<W: Write>(out: &mut W, cfg: &GameConfig) -> io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, (cfg.height - 1).max(0) as u16))?;
    Ok(())
}

// ── Title / menu ──────────────────────────────────────────────────────────────

/// Background for the startup menu: cleared screen plus the splash banner.
pub fn draw_title_screen<W: Write>(out: &mut W, cfg: &GameConfig) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let splash = sprites::splash();
    let sx = cfg.width / 2 - splash.width() / 2;
    let sy = (cfg.height / 4 - splash.height() / 2).max(0);
    draw_sprite(out, splash, sx, sy, C_SPLASH, cfg)?;
    draw_centered_lines(
        out,
        &["Pick a game mode".to_string()],
        sy + splash.height() + 2,
        cfg,
    )?;
    park_cursor(out, cfg)?;
    out.flush()
}

/// The mode buttons, redrawn every frame on top of the title screen.
pub fn draw_menu_buttons<W: Write>(out: &mut W, menu: &MenuScene, cfg: &GameConfig) -> io::Result<()> {
    for button in &menu.buttons {
        let bg = match button.mode {
            Mode::Dodge => C_BTN_DODGE,
            Mode::Catch => C_BTN_CATCH,
        };
        out.queue(style::SetBackgroundColor(bg))?;
        out.queue(style::SetForegroundColor(C_BTN_LABEL))?;
        let r = button.rect;
        for row in 0..r.h {
            let ry = r.y + row;
            if ry < 0 || ry >= cfg.height {
                continue;
            }
            out.queue(cursor::MoveTo(r.x.max(0) as u16, ry as u16))?;
            if row == r.h / 2 {
                let pad = (r.w as usize).saturating_sub(button.label.chars().count());
                let left = pad / 2;
                out.queue(Print(format!(
                    "{}{}{}",
                    " ".repeat(left),
                    button.label,
                    " ".repeat(pad - left)
                )))?;
            } else {
                out.queue(Print(" ".repeat(r.w.max(0) as usize)))?;
            }
        }
        out.queue(style::ResetColor)?;
    }

    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(cursor::MoveTo(1, (cfg.height - 1).max(0) as u16))?;
    out.queue(Print("Click a mode to play   Esc : Quit"))?;
    park_cursor(out, cfg)?;
    out.flush()
}

// ── Pause cards ───────────────────────────────────────────────────────────────

/// Mode-info / level-cleared / game-over card: optional splash banner above
/// multi-line text centered on screen. Drawn exactly once per scene.
pub fn draw_pause_card<W: Write>(
    out: &mut W,
    lines: &[String],
    show_splash: bool,
    cfg: &GameConfig,
) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut top = cfg.height / 2 - lines.len() as i32 / 2;
    if show_splash {
        let splash = sprites::splash();
        top += splash.height() / 2;
        let sx = cfg.width / 2 - splash.width() / 2;
        let sy = (top - splash.height() - 1).max(0);
        draw_sprite(out, splash, sx, sy, C_SPLASH, cfg)?;
    }
    draw_centered_lines(out, lines, top, cfg)?;
    park_cursor(out, cfg)?;
    out.flush()
}

// ── Level frame ───────────────────────────────────────────────────────────────

/// Render one complete level frame: background, sprites, score text and one
/// life icon per remaining life.
pub fn draw_level<W: Write>(out: &mut W, state: &LevelState, cfg: &GameConfig) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for faller in &state.fallers {
        let color = match faller.kind {
            FallerKind::HeavyWeight => C_HEAVY,
            FallerKind::LightWeight => C_LIGHT,
            FallerKind::Egg => C_EGG,
        };
        let sprite = sprites::faller_sprite(faller.kind);
        draw_sprite(out, sprite, faller.rect.x, faller.rect.y, color, cfg)?;
    }

    let catcher_color = match state.mode {
        Mode::Dodge => C_BANANA,
        Mode::Catch => C_BASKET,
    };
    draw_sprite(
        out,
        sprites::catcher_sprite(state.mode),
        state.catcher.rect.x,
        state.catcher.rect.y,
        catcher_color,
        cfg,
    )?;

    out.queue(cursor::MoveTo(
        cfg.score_x.max(0) as u16,
        cfg.score_y.max(0) as u16,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{}", state.score)))?;

    for i in 0..state.lives as i32 {
        let lx = cfg.life_x + i * cfg.life_spacing;
        if lx < 0 || lx >= cfg.width {
            continue;
        }
        draw_sprite(out, sprites::life_icon(), lx, cfg.life_y, C_HUD_LIVES, cfg)?;
    }

    park_cursor(out, cfg)?;
    out.flush()
}
