// Purpose: boundary to the sound engine
// The controller only speaks in EngineCommands; engines decide how they sound

pub mod midi;
#[cfg(feature = "rtrb")]
pub mod queue;
pub mod recorder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chord::Chord;

pub use midi::{MidiEngine, MidiEvent, MidiSink};
#[cfg(feature = "rtrb")]
pub use queue::{command_queue, CommandReceiver};
pub use recorder::RecordingEngine;

/// One-shot drum samples.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Percussion {
    Kick,
    Snare,
    HiHat,
    Clap,
}

impl Percussion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Snare => "snare",
            Self::HiHat => "hihat",
            Self::Clap => "clap",
        }
    }
}

/// A single instruction for the sound engine.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "command", rename_all = "snake_case")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    /// Fire-and-forget drum hit
    Percussive { sample: Percussion },
    /// Replace the sustained pad chord
    Chord { chord: Chord },
    /// Update the pad filter (sent every frame)
    Filter { cutoff_hz: f32, resonance: f32 },
}

impl EngineCommand {
    /// Send this command to an engine.
    pub fn dispatch<E: AudioEngine + ?Sized>(&self, engine: &mut E) -> Result<(), EngineError> {
        match *self {
            EngineCommand::Percussive { sample } => engine.play_percussive(sample),
            EngineCommand::Chord { chord } => engine.play_chord(&chord),
            EngineCommand::Filter {
                cutoff_hz,
                resonance,
            } => engine.set_filter(cutoff_hz, resonance),
        }
    }
}

/// The sound engine as seen by the controller.
///
/// Calls are synchronous. A failed call affects that command only; the
/// controller keeps going on the next frame.
pub trait AudioEngine {
    /// Start a drum sample. The engine restarts it if already playing.
    fn play_percussive(&mut self, sample: Percussion) -> Result<(), EngineError>;

    /// Replace the currently sustained chord.
    fn play_chord(&mut self, chord: &Chord) -> Result<(), EngineError>;

    /// Set filter cutoff (Hz) and resonance (0.0-1.0). Idempotent.
    fn set_filter(&mut self, cutoff_hz: f32, resonance: f32) -> Result<(), EngineError>;
}

/// Errors an engine can report for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Command queue has no free slot
    QueueFull,
    /// The receiving side of the engine is gone
    Disconnected,
    /// Engine-specific failure
    Backend(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::QueueFull => write!(f, "Engine command queue is full"),
            EngineError::Disconnected => write!(f, "Engine is disconnected"),
            EngineError::Backend(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
