//! Audio cues emitted by the game for the presentation layer.
//!
//! The game never waits on audio. A [`CueSink`] may fail, be muted, or do
//! nothing at all; [`play_cues`] swallows every failure.

mod soundtrack;

#[allow(unused_imports)]
pub use soundtrack::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named sound effect triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Attack,
    Block,
    LevelUp,
    Purchase,
    Error,
    MonsterDefeat,
    Victory,
}

impl Cue {
    pub fn all() -> [Cue; 7] {
        [
            Cue::Attack,
            Cue::Block,
            Cue::LevelUp,
            Cue::Purchase,
            Cue::Error,
            Cue::MonsterDefeat,
            Cue::Victory,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cue::Attack => "attack",
            Cue::Block => "block",
            Cue::LevelUp => "levelUp",
            Cue::Purchase => "purchase",
            Cue::Error => "error",
            Cue::MonsterDefeat => "monsterDefeat",
            Cue::Victory => "victory",
        }
    }

    /// Sample file for the cue. `None` means the cue is silent.
    pub fn sample(&self) -> Option<&'static str> {
        match self {
            Cue::Attack => None,
            Cue::Block | Cue::LevelUp | Cue::Purchase | Cue::MonsterDefeat | Cue::Error => {
                Some("/bell-ringing-05.wav")
            }
            Cue::Victory => Some("/im_groot_victory.mp3"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("audio device unavailable")]
    DeviceUnavailable,
    #[error("sample not found: {0}")]
    MissingSample(String),
    #[error("playback failed: {0}")]
    Playback(String),
}

/// Receiver for cues. Implemented by whatever actually plays sound.
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl CueSink for NullSink {
    fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Remembers every cue it receives. Used by the simulator for cue counts.
#[derive(Debug, Default, Clone)]
pub struct CueRecorder {
    pub played: Vec<Cue>,
}

impl CueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.played.iter().filter(|&&c| c == cue).count()
    }
}

impl CueSink for CueRecorder {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.played.push(cue);
        Ok(())
    }
}

/// Forwards cues to `sink`, ignoring failures. Returns how many played.
pub fn play_cues<I>(cues: I, sink: &mut dyn CueSink) -> usize
where
    I: IntoIterator<Item = Cue>,
{
    let mut played = 0;
    for cue in cues {
        match sink.play(cue) {
            Ok(()) => played += 1,
            Err(e) => tracing::debug!(cue = cue.name(), error = %e, "cue dropped"),
        }
    }
    played
}
