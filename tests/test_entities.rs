use squish::entities::*;

// ── Rect geometry ─────────────────────────────────────────────────────────────

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10, 20, 6, 4);
    assert_eq!(r.right(), 16);
    assert_eq!(r.bottom(), 24);
    assert_eq!(r.center_x(), 13);
}

#[test]
fn set_midbottom_places_bottom_center() {
    let mut r = Rect::new(0, 0, 6, 4);
    r.set_midbottom(20, 0);
    assert_eq!(r.center_x(), 20);
    assert_eq!(r.bottom(), 0);
    assert_eq!(r.y, -4);
}

#[test]
fn intersects_is_strict() {
    let a = Rect::new(0, 0, 5, 5);
    assert!(a.intersects(&Rect::new(4, 4, 5, 5)));
    // Rects sharing only an edge do not intersect.
    assert!(!a.intersects(&Rect::new(5, 0, 5, 5)));
    assert!(!a.intersects(&Rect::new(0, 5, 5, 5)));
    assert!(!a.intersects(&Rect::new(9, 9, 2, 2)));
}

#[test]
fn contains_is_half_open() {
    let r = Rect::new(2, 3, 4, 4);
    assert!(r.contains(2, 3));
    assert!(r.contains(5, 6));
    assert!(!r.contains(6, 3));
    assert!(!r.contains(2, 7));
}

#[test]
fn shrunk_keeps_center_and_floors_at_zero() {
    let r = Rect::new(10, 10, 6, 4);
    let s = r.shrunk(2, 2);
    assert_eq!(s, Rect::new(11, 11, 4, 2));
    let tiny = r.shrunk(100, 100);
    assert_eq!(tiny.w, 0);
    assert_eq!(tiny.h, 0);
}

#[test]
fn inset_shrinks_all_sides() {
    let r = Rect::new(0, 0, 80, 24).inset(2);
    assert_eq!(r, Rect::new(2, 2, 76, 20));
}

#[test]
fn clamped_into_moves_minimally() {
    let area = Rect::new(2, 2, 76, 20);
    let inside = Rect::new(30, 10, 5, 4);
    assert_eq!(inside.clamped_into(&area), inside);

    let left = Rect::new(-10, 10, 5, 4);
    assert_eq!(left.clamped_into(&area).x, area.x);

    let right = Rect::new(200, 10, 5, 4);
    assert_eq!(right.clamped_into(&area).right(), area.right());
}

#[test]
fn clamped_into_centers_an_oversized_rect() {
    let area = Rect::new(10, 10, 20, 20);
    let wide = Rect::new(0, 12, 30, 4);
    let clamped = wide.clamped_into(&area);
    assert_eq!(clamped.x, area.x + (area.w - wide.w) / 2);
}

// ── Plain-data behaviour ──────────────────────────────────────────────────────

#[test]
fn enums_compare_by_value() {
    assert_eq!(Mode::Dodge, Mode::Dodge);
    assert_ne!(Mode::Dodge, Mode::Catch);
    assert_eq!(FallerKind::Egg, FallerKind::Egg);
    assert_ne!(FallerKind::HeavyWeight, FallerKind::LightWeight);
}

#[test]
fn level_state_clone_is_independent() {
    let original = LevelState {
        mode: Mode::Dodge,
        number: 1,
        score: 0,
        lives: 5,
        remaining: 10,
        area: Rect::new(2, 2, 76, 20),
        fallers: vec![Faller {
            kind: FallerKind::HeavyWeight,
            rect: Rect::new(3, 5, 8, 3),
            speed: 1,
            bias: 2,
            stagger: 20,
            landed: false,
        }],
        catcher: Catcher {
            rect: Rect::new(38, 18, 5, 4),
            pad_top: 1,
            pad_side: 2,
        },
        pointer_x: 40,
        key_step: 3,
    };
    let mut cloned = original.clone();

    cloned.score = 99;
    cloned.fallers[0].landed = true;
    cloned.catcher.rect.x = 0;

    assert_eq!(original.score, 0);
    assert!(!original.fallers[0].landed);
    assert_eq!(original.catcher.rect.x, 38);
}
