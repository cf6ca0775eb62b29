use squish::audio::Cue;
use squish::config::GameConfig;
use squish::entities::{Mode, Rect};
use squish::scenes::{Control, Game, InputEvent, Key, Scene};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn cfg() -> GameConfig {
    GameConfig::default()
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn click_inside(r: Rect) -> InputEvent {
    InputEvent::MouseButtonDown(r.x + r.w / 2, r.y + r.h / 2)
}

fn menu_button_rect(scene: &Scene, index: usize) -> Rect {
    match scene {
        Scene::Menu(menu) => menu.buttons[index].rect,
        _ => panic!("expected the startup menu"),
    }
}

// ── Startup menu ──────────────────────────────────────────────────────────────

#[test]
fn menu_click_on_first_button_requests_mode_info() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::startup_menu(&config);
    let rect = menu_button_rect(&scene, 0);

    assert_eq!(scene.handle(&click_inside(rect)), Control::Continue);
    let update = scene.update(&config, &mut rng);
    assert!(update.cues.is_empty());
    match update.next {
        Some(Scene::Paused(card)) => {
            assert_eq!(card.next_mode, Mode::Dodge);
            assert_eq!(card.next_number, 1);
            assert_eq!(card.next_score, 0);
            assert!(card.show_splash);
        }
        _ => panic!("expected the mode-info card"),
    }
}

#[test]
fn menu_click_on_second_button_selects_catch_mode() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::startup_menu(&config);
    let rect = menu_button_rect(&scene, 1);

    scene.handle(&click_inside(rect));
    match scene.update(&config, &mut rng).next {
        Some(Scene::Paused(card)) => assert_eq!(card.next_mode, Mode::Catch),
        _ => panic!("expected the mode-info card"),
    }
}

#[test]
fn menu_click_outside_buttons_rerequests_the_menu() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::startup_menu(&config);

    scene.handle(&InputEvent::MouseButtonDown(0, 0));
    match scene.update(&config, &mut rng).next {
        Some(Scene::Menu(_)) => {}
        _ => panic!("expected a fresh menu"),
    }
}

#[test]
fn menu_without_input_requests_nothing() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::startup_menu(&config);
    assert!(scene.update(&config, &mut rng).next.is_none());
}

#[test]
fn menu_ignores_mouse_motion() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::startup_menu(&config);
    let rect = menu_button_rect(&scene, 0);

    scene.handle(&InputEvent::MouseMotion(rect.x, rect.y));
    assert!(scene.update(&config, &mut rng).next.is_none());
}

// ── Pause cards ───────────────────────────────────────────────────────────────

#[test]
fn info_card_keydown_starts_the_first_level() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::mode_info(Mode::Dodge);

    scene.handle(&InputEvent::KeyDown(Key::Other));
    match scene.update(&config, &mut rng).next {
        Some(Scene::Level(state)) => {
            assert_eq!(state.mode, Mode::Dodge);
            assert_eq!(state.number, 1);
            assert_eq!(state.score, 0);
            assert_eq!(state.lives, config.lives);
        }
        _ => panic!("expected the first level"),
    }
}

#[test]
fn pause_card_ignores_mouse_motion() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::mode_info(Mode::Catch);

    scene.handle(&InputEvent::MouseMotion(10, 10));
    assert!(scene.update(&config, &mut rng).next.is_none());
}

#[test]
fn level_cleared_carries_score_and_resets_lives() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::level_cleared(Mode::Dodge, 3, 7);

    scene.handle(&InputEvent::MouseButtonDown(40, 12));
    match scene.update(&config, &mut rng).next {
        Some(Scene::Level(state)) => {
            assert_eq!(state.mode, Mode::Dodge);
            assert_eq!(state.number, 4);
            assert_eq!(state.score, 7);
            assert_eq!(state.lives, config.lives);
        }
        _ => panic!("expected the next level"),
    }
}

#[test]
fn game_over_restarts_from_scratch() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::game_over(Mode::Catch);

    scene.handle(&InputEvent::KeyDown(Key::Other));
    match scene.update(&config, &mut rng).next {
        Some(Scene::Level(state)) => {
            assert_eq!(state.mode, Mode::Catch);
            assert_eq!(state.number, 1);
            assert_eq!(state.score, 0);
            assert_eq!(state.lives, config.lives);
        }
        _ => panic!("expected a restarted level"),
    }
}

// ── Quitting ──────────────────────────────────────────────────────────────────

#[test]
fn escape_and_quit_terminate_every_scene() {
    let config = cfg();
    let mut rng = seeded_rng();
    let scenes = [
        Scene::startup_menu(&config),
        Scene::mode_info(Mode::Dodge),
        Scene::level(Mode::Catch, 1, 0, &config, &mut rng),
    ];
    for mut scene in scenes {
        assert_eq!(scene.handle(&InputEvent::Quit), Control::Quit);
        assert_eq!(
            scene.handle(&InputEvent::KeyDown(Key::Escape)),
            Control::Quit
        );
    }
}

#[test]
fn escape_does_not_latch_a_pause_card() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::mode_info(Mode::Dodge);
    assert_eq!(
        scene.handle(&InputEvent::KeyDown(Key::Escape)),
        Control::Quit
    );
    // The quit outcome short-circuits the finished latch.
    assert!(scene.update(&config, &mut rng).next.is_none());
}

// ── Level scenes ──────────────────────────────────────────────────────────────

#[test]
fn level_tracks_pointer_and_keys() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::level(Mode::Dodge, 1, 0, &config, &mut rng);

    scene.handle(&InputEvent::MouseMotion(17, 3));
    let Scene::Level(state) = &scene else {
        panic!("expected a level");
    };
    assert_eq!(state.pointer_x, 17);

    scene.handle(&InputEvent::KeyDown(Key::Right));
    scene.handle(&InputEvent::KeyDown(Key::Right));
    scene.handle(&InputEvent::KeyDown(Key::Left));
    let Scene::Level(state) = &scene else {
        panic!("expected a level");
    };
    assert_eq!(state.pointer_x, 17 + config.catcher_step);
}

#[test]
fn level_collision_plays_crash_then_fail_on_game_over() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::level(Mode::Dodge, 1, 0, &config, &mut rng);
    {
        let Scene::Level(state) = &mut scene else {
            panic!("expected a level");
        };
        state.lives = 2;
        // Heavy weight dropping straight onto the catcher this tick.
        let drop = state.fallers[0].speed + state.fallers[0].bias;
        state.fallers[0].rect.x = 37;
        state.fallers[0].rect.y = state.area.bottom() - state.fallers[0].rect.h - drop;
        state.fallers[1].rect = Rect::new(3, 5, 6, 3);
    }
    let update = scene.update(&config, &mut rng);
    assert_eq!(update.cues, vec![Cue::Crash, Cue::Fail]);
    match update.next {
        Some(Scene::Paused(card)) => {
            assert_eq!(card.next_mode, Mode::Dodge);
            assert_eq!(card.next_number, 1);
            assert_eq!(card.next_score, 0);
        }
        _ => panic!("expected the game-over card"),
    }
}

#[test]
fn level_clear_plays_level_up_and_queues_next_level() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut scene = Scene::level(Mode::Dodge, 2, 5, &config, &mut rng);
    {
        let Scene::Level(state) = &mut scene else {
            panic!("expected a level");
        };
        state.remaining = 1;
        // Light weight landing far from the catcher this tick.
        let drop = state.fallers[1].speed + state.fallers[1].bias;
        state.fallers[1].rect.x = 3;
        state.fallers[1].rect.y = state.area.bottom() - drop;
        state.fallers[0].rect = Rect::new(14, 5, 8, 3);
    }
    let update = scene.update(&config, &mut rng);
    assert_eq!(update.cues, vec![Cue::LevelUp]);
    match update.next {
        Some(Scene::Paused(card)) => {
            assert_eq!(card.next_mode, Mode::Dodge);
            assert_eq!(card.next_number, 3);
            assert_eq!(card.next_score, 5 + config.score_for_light);
        }
        _ => panic!("expected the level-cleared card"),
    }
}

// ── The machine itself ────────────────────────────────────────────────────────

#[test]
fn initial_scene_needs_exactly_one_first_render() {
    let config = cfg();
    let mut game = Game::new(&config);
    assert!(game.commit_transition());
    assert!(!game.commit_transition());
}

#[test]
fn requested_scene_is_held_until_the_commit_point() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut game = Game::new(&config);
    game.commit_transition();

    let rect = menu_button_rect(game.scene(), 0);
    game.handle(&click_inside(rect));
    let cues = game.update(&config, &mut rng);
    assert!(cues.is_empty());

    // Still on the menu: the swap only happens at the commit point.
    assert!(matches!(game.scene(), Scene::Menu(_)));
    assert!(game.requested().is_some());

    assert!(game.commit_transition());
    assert!(matches!(game.scene(), Scene::Paused(_)));
    assert!(game.requested().is_none());
}

#[test]
fn full_path_from_menu_to_first_level() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut game = Game::new(&config);
    game.commit_transition();

    // Click the first (banana) button…
    let rect = menu_button_rect(game.scene(), 0);
    game.handle(&click_inside(rect));
    game.update(&config, &mut rng);
    game.commit_transition();

    // …press a key on the info card…
    game.handle(&InputEvent::KeyDown(Key::Other));
    game.update(&config, &mut rng);
    game.commit_transition();

    // …and the first dodge level is running.
    match game.scene() {
        Scene::Level(state) => {
            assert_eq!(state.mode, Mode::Dodge);
            assert_eq!(state.number, 1);
            assert_eq!(state.score, 0);
            assert_eq!(state.lives, config.lives);
            assert_eq!(state.remaining, config.quota_per_level);
        }
        _ => panic!("expected the first level"),
    }
}
