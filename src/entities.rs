//! All game entity types — pure data, no I/O.
//!
//! Geometry is in terminal cells: x grows rightward, y grows downward.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle, top-left anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn set_center_x(&mut self, cx: i32) {
        self.x = cx - self.w / 2;
    }

    /// Place the rect so its bottom-center sits at `(cx, bottom)`.
    pub fn set_midbottom(&mut self, cx: i32, bottom: i32) {
        self.set_center_x(cx);
        self.y = bottom - self.h;
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Strict overlap: rects sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by `dw` horizontally and `dh` vertically, keeping the center.
    pub fn shrunk(&self, dw: i32, dh: i32) -> Rect {
        Rect {
            x: self.x + dw / 2,
            y: self.y + dh / 2,
            w: (self.w - dw).max(0),
            h: (self.h - dh).max(0),
        }
    }

    /// The rect inset by `d` on all four sides.
    pub fn inset(&self, d: i32) -> Rect {
        Rect {
            x: self.x + d,
            y: self.y + d,
            w: (self.w - 2 * d).max(0),
            h: (self.h - 2 * d).max(0),
        }
    }

    /// Move the rect the minimal distance so it lies inside `area`.
    /// An axis on which the rect is at least as large as the area is centred.
    pub fn clamped_into(&self, area: &Rect) -> Rect {
        let x = if self.w >= area.w {
            area.x + (area.w - self.w) / 2
        } else {
            self.x.clamp(area.x, area.right() - self.w)
        };
        let y = if self.h >= area.h {
            area.y + (area.h - self.h) / 2
        } else {
            self.y.clamp(area.y, area.bottom() - self.h)
        };
        Rect { x, y, ..*self }
    }
}

// ── Game enums ────────────────────────────────────────────────────────────────

/// Which game is being played. Fixed for the run of a session branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Banana dodging falling weights.
    Dodge,
    /// Basket catching falling eggs.
    Catch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallerKind {
    /// 16-ton class: falls fastest, hits hardest, scores most when dodged.
    HeavyWeight,
    /// 8-ton class.
    LightWeight,
    Egg,
}

// ── Falling entities & catcher ────────────────────────────────────────────────

/// A falling hazard (weight) or collectible (egg).
#[derive(Clone, Debug)]
pub struct Faller {
    pub kind: FallerKind,
    pub rect: Rect,
    /// Base drop distance per tick, grows with the level number.
    pub speed: i32,
    /// Class-specific additive drop constant (heavier falls faster).
    pub bias: i32,
    /// Max extra vertical offset applied above the playfield by a reset.
    pub stagger: i32,
    /// Recomputed every tick from position vs. the playfield bottom.
    pub landed: bool,
}

/// The player-controlled banana or basket. Sits on the playfield bottom,
/// horizontal position follows the pointer coordinate.
#[derive(Clone, Debug)]
pub struct Catcher {
    pub rect: Rect,
    /// Rows of transparent art at the top that must not count as a
    /// hit/catch surface.
    pub pad_top: i32,
    /// Columns of transparent art at the sides, total across both.
    pub pad_side: i32,
}

// ── Level simulation state ────────────────────────────────────────────────────

/// Everything one level of either mode needs between ticks.
#[derive(Clone, Debug)]
pub struct LevelState {
    pub mode: Mode,
    /// Level number, 1-based. Raises the drop speed.
    pub number: u32,
    pub score: u32,
    pub lives: u32,
    /// Entities still to resolve before the level is cleared.
    pub remaining: u32,
    /// The playfield inset by the margin: where entities may move.
    pub area: Rect,
    pub fallers: Vec<Faller>,
    pub catcher: Catcher,
    /// Last seen horizontal pointer coordinate; the catcher tracks it.
    pub pointer_x: i32,
    /// Pointer displacement applied per left/right key press.
    pub key_step: i32,
}
