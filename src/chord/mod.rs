// Purpose: chords for the sustained pad
// Note names and qualities resolve to frequencies and MIDI notes here

pub mod note;
pub mod progression;
pub mod quality;

use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use note::NoteName;
pub use progression::{ChordProgression, ChordState};
pub use quality::ChordQuality;

/// Middle C (C4) in Hz
pub const MIDDLE_C_HZ: f32 = 261.63;

/// Root octaves a progression accepts; C-1 to B9 covers the MIDI key range
pub const OCTAVE_RANGE: RangeInclusive<i32> = -1..=9;

/// A chord as sent to the pad: root, quality and root octave.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub root: NoteName,
    pub quality: ChordQuality,
    /// Octave of the root, 4 = middle C octave
    pub octave: i32,
}

impl Chord {
    pub fn new(root: NoteName, quality: ChordQuality, octave: i32) -> Self {
        Self {
            root,
            quality,
            octave,
        }
    }

    /// Build a chord from text, as written in a progression file.
    ///
    /// An unknown root is an error; an unknown quality falls back to major.
    pub fn parse(root: &str, quality: &str, octave: i32) -> Result<Self, ChordError> {
        Ok(Self::new(root.parse()?, ChordQuality::parse_lenient(quality), octave))
    }

    /// Root frequency in Hz.
    pub fn root_frequency(&self) -> f32 {
        let octaves = (i64::from(self.octave) - 4) as f32;
        MIDDLE_C_HZ * 2.0_f32.powf(octaves) * self.root.ratio()
    }

    /// Chord tone frequencies in Hz, root first.
    pub fn frequencies(&self) -> impl Iterator<Item = f32> {
        let root = self.root_frequency();
        self.quality
            .intervals()
            .iter()
            .map(move |&interval| root * 2.0_f32.powf(interval as f32 / 12.0))
    }

    /// Pad voicing: chord tones followed by each tone an octave up.
    pub fn voicing(&self) -> Vec<f32> {
        let mut voices: Vec<f32> = self.frequencies().collect();
        let doubled: Vec<f32> = voices.iter().map(|f| f * 2.0).collect();
        voices.extend(doubled);
        voices
    }

    /// MIDI note numbers of the chord tones (C4 = 60). Tones outside
    /// 0-127 are dropped.
    pub fn midi_notes(&self) -> impl Iterator<Item = u8> {
        let root = 12 * (i64::from(self.octave) + 1) + i64::from(self.root.semitone());
        self.quality
            .intervals()
            .iter()
            .map(move |&interval| root + i64::from(interval))
            .filter_map(|note| u8::try_from(note).ok().filter(|n| *n <= 127))
    }
}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} {}", self.root.as_str(), self.octave, self.quality.as_str())
    }
}

/// Errors that can occur when describing chords
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// Root note name not recognized
    UnknownNote(String),
    /// Quality name not recognized (strict parsing only)
    UnknownQuality(String),
    /// A progression needs at least one chord
    EmptyProgression,
    /// Root octave outside [`OCTAVE_RANGE`]
    OctaveOutOfRange(i32),
}

impl std::fmt::Display for ChordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChordError::UnknownNote(name) => write!(f, "Unknown note name: {:?}", name),
            ChordError::UnknownQuality(name) => write!(f, "Unknown chord quality: {:?}", name),
            ChordError::EmptyProgression => write!(f, "Chord progression is empty"),
            ChordError::OctaveOutOfRange(octave) => write!(
                f,
                "Octave {} is outside {}..={}",
                octave,
                OCTAVE_RANGE.start(),
                OCTAVE_RANGE.end()
            ),
        }
    }
}

impl std::error::Error for ChordError {}
