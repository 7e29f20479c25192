/*
Pitch Classes
=============

Twelve-tone equal temperament, named from C. Sharps are canonical;
flats parse to the same pitch class.

  C  C#  D  D#  E  F  F#  G  G#  A  A#  B
  0  1   2  3   4  5  6   7  8   9  10  11

Frequency ratio to C of the same octave: 2^(semitone / 12)
*/

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ChordError;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 12] = [
        Self::C,
        Self::Cs,
        Self::D,
        Self::Ds,
        Self::E,
        Self::F,
        Self::Fs,
        Self::G,
        Self::Gs,
        Self::A,
        Self::As,
        Self::B,
    ];

    /// Semitones above C (0-11).
    pub fn semitone(&self) -> u8 {
        *self as u8
    }

    pub fn from_semitone(semitone: i32) -> Self {
        Self::ALL[semitone.rem_euclid(12) as usize]
    }

    /// Frequency ratio to C in the same octave.
    pub fn ratio(&self) -> f32 {
        2.0_f32.powf(self.semitone() as f32 / 12.0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cs => "C#",
            Self::D => "D",
            Self::Ds => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::Fs => "F#",
            Self::G => "G",
            Self::Gs => "G#",
            Self::A => "A",
            Self::As => "A#",
            Self::B => "B",
        }
    }
}

impl FromStr for NoteName {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let mut chars = name.chars();
        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(ChordError::UnknownNote(s.to_string())),
        };
        let accidental = match chars.as_str() {
            "" => 0,
            "#" | "s" | "♯" => 1,
            "b" | "♭" => -1,
            _ => return Err(ChordError::UnknownNote(s.to_string())),
        };
        Ok(Self::from_semitone(natural + accidental))
    }
}

impl TryFrom<String> for NoteName {
    type Error = ChordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NoteName> for String {
    fn from(note: NoteName) -> Self {
        note.as_str().to_string()
    }
}
