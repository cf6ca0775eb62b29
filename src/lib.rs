//! Squish — a two-mode falling-object arcade game for the terminal.
//!
//! Dodge falling weights as a banana, or catch falling eggs with a basket.
//!
//! Core modules:
//! - `entities`: pure data types (rects, fallers, catchers, level state)
//! - `compute`: pure per-tick simulation logic
//! - `scenes`: scene state machine (menu, info cards, levels, game over)
//! - `display`: crossterm rendering layer
//! - `sprites`: embedded character-art assets
//! - `audio`: synthesized sound cues
//! - `config`: tunable constants

pub mod audio;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod scenes;
pub mod sprites;
