use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::{thread_rng, Rng};

use squish::audio::AudioPlayer;
use squish::config::GameConfig;
use squish::scenes::{Control, Game, InputEvent, Key};

// ── Frame clock ───────────────────────────────────────────────────────────────

/// Blocks the calling thread so that successive `tick` calls return roughly
/// `1 / fps` seconds apart.
struct Clock {
    last: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    fn tick(&mut self, fps: u32) {
        let target = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let elapsed = self.last.elapsed();
        if elapsed < target {
            thread::sleep(target - elapsed);
        }
        self.last = Instant::now();
    }
}

// ── Input translation ─────────────────────────────────────────────────────────

/// Map a terminal event onto the core input model. Events the core has no
/// use for (resize, scroll, key release) are dropped here.
fn translate_event(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Some(InputEvent::Quit);
            }
            Some(InputEvent::KeyDown(translate_key(code)))
        }
        Event::Mouse(m) => match m.kind {
            MouseEventKind::Down(_) => {
                Some(InputEvent::MouseButtonDown(m.column as i32, m.row as i32))
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(InputEvent::MouseMotion(m.column as i32, m.row as i32))
            }
            _ => None,
        },
        _ => None,
    }
}

fn translate_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        _ => Key::Other,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One iteration per frame: commit a pending scene transition (first-render
/// the fresh scene), drain input events in arrival order, update the active
/// scene, play its sound cues, render, then sleep to the frame rate. A quit
/// observed while draining input returns before update and render run.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    cfg: &GameConfig,
    audio: &AudioPlayer,
    rng: &mut impl Rng,
) -> anyhow::Result<()> {
    let mut game = Game::new(cfg);
    let mut clock = Clock::new();

    loop {
        if game.commit_transition() {
            game.first_render(out, cfg)?;
        }

        while let Ok(ev) = rx.try_recv() {
            if let Some(input) = translate_event(ev) {
                if game.handle(&input) == Control::Quit {
                    return Ok(());
                }
            }
        }

        for cue in game.update(cfg, rng) {
            audio.play(cue);
        }

        game.render(out, cfg)?;
        clock.tick(cfg.fps);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let audio = AudioPlayer::new().context("failed to open an audio output device")?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on input I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let (width, height) = terminal::size().context("failed to query the terminal size")?;
    let cfg = GameConfig::for_screen(width as i32, height as i32);
    log::info!("starting squish on a {width}x{height} terminal");

    let mut rng = thread_rng();
    let result = run(&mut out, &rx, &cfg, &audio, &mut rng);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
