//! Embedded character-art assets.
//!
//! A sprite's size derives from its art, the way image-backed sprites derive
//! theirs from the loaded file. Collision rects use these dimensions.

use crate::entities::{FallerKind, Mode};

pub struct Sprite {
    pub rows: &'static [&'static str],
}

impl Sprite {
    pub fn width(&self) -> i32 {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }
}

static HEAVY_WEIGHT: Sprite = Sprite {
    rows: &[
        " .----. ",
        "/ 16 T \\",
        "'------'",
    ],
};

static LIGHT_WEIGHT: Sprite = Sprite {
    rows: &[
        " .--. ",
        "/ 8T \\",
        "'----'",
    ],
};

static BANANA: Sprite = Sprite {
    rows: &[
        "  __ ",
        " //  ",
        "((   ",
        " \\\\__",
    ],
};

static EGG: Sprite = Sprite {
    rows: &[
        " _ ",
        "(_)",
    ],
};

static BASKET: Sprite = Sprite {
    rows: &[
        "\\______/",
        " \\____/ ",
    ],
};

static LIFE: Sprite = Sprite { rows: &["♥"] };

static SPLASH: Sprite = Sprite {
    rows: &[
        " ####    ###   #   #  ###   ####  #   #",
        "#       #   #  #   #   #   #      #   #",
        " ###    #   #  #   #   #    ###   #####",
        "    #   #  ##  #   #   #       #  #   #",
        "####     ## #   ###   ###   ####  #   #",
    ],
};

pub fn faller_sprite(kind: FallerKind) -> &'static Sprite {
    match kind {
        FallerKind::HeavyWeight => &HEAVY_WEIGHT,
        FallerKind::LightWeight => &LIGHT_WEIGHT,
        FallerKind::Egg => &EGG,
    }
}

pub fn catcher_sprite(mode: Mode) -> &'static Sprite {
    match mode {
        Mode::Dodge => &BANANA,
        Mode::Catch => &BASKET,
    }
}

pub fn splash() -> &'static Sprite {
    &SPLASH
}

pub fn life_icon() -> &'static Sprite {
    &LIFE
}
