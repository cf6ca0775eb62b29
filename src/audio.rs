//! Synthesized sound cues.
//!
//! Cues are short sine-tone sequences played on detached sinks:
//! fire-and-forget, never blocking the game loop. A missing output device is
//! fatal at startup; a failed playback later is merely logged and dropped.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink, StreamError};

/// A sound the simulation asked for this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Collision with a weight, or an egg hitting the ground.
    Crash,
    /// Lives exhausted.
    Fail,
    /// Level cleared.
    LevelUp,
}

impl Cue {
    /// (frequency Hz, duration ms) pairs, played back to back.
    fn tones(self) -> &'static [(f32, u64)] {
        match self {
            Cue::Crash => &[(180.0, 90), (140.0, 130)],
            Cue::Fail => &[(330.0, 160), (262.0, 160), (196.0, 280)],
            Cue::LevelUp => &[(392.0, 110), (494.0, 110), (587.0, 170)],
        }
    }
}

pub struct AudioPlayer {
    handle: Option<OutputStreamHandle>,
    // Keeps the device alive; dropping it silences every sink.
    _stream: Option<OutputStream>,
}

impl AudioPlayer {
    pub fn new() -> Result<Self, StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            handle: Some(handle),
            _stream: Some(stream),
        })
    }

    /// A player with no output device; `play` becomes a no-op. Used by tests
    /// and anywhere sound is unwanted.
    pub fn disabled() -> Self {
        Self {
            handle: None,
            _stream: None,
        }
    }

    /// Fire-and-forget playback. Failures are logged and swallowed.
    pub fn play(&self, cue: Cue) {
        let Some(handle) = &self.handle else {
            return;
        };
        let sink = match Sink::try_new(handle) {
            Ok(sink) => sink,
            Err(err) => {
                log::debug!("sound cue {cue:?} suppressed: {err}");
                return;
            }
        };
        for &(freq, ms) in cue.tones() {
            sink.append(
                SineWave::new(freq)
                    .take_duration(Duration::from_millis(ms))
                    .amplify(0.20),
            );
        }
        sink.detach();
    }
}
