use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ChordError;

/*
| quality | intervals (semitones) |
| ------- | --------------------- |
| major   | 0 4 7                 |
| minor   | 0 3 7                 |
| dim     | 0 3 6                 |
| aug     | 0 4 8                 |
| sus4    | 0 5 7                 |
| maj7    | 0 4 7 11              |
| min7    | 0 3 7 10              |
| dom7    | 0 4 7 10              |
*/

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChordQuality {
    #[default]
    Major,
    Minor,
    Dim,
    Aug,
    Sus4,
    Maj7,
    Min7,
    Dom7,
}

impl ChordQuality {
    /// Semitones above the root, root first.
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Minor => &[0, 3, 7],
            Self::Dim => &[0, 3, 6],
            Self::Aug => &[0, 4, 8],
            Self::Sus4 => &[0, 5, 7],
            Self::Maj7 => &[0, 4, 7, 11],
            Self::Min7 => &[0, 3, 7, 10],
            Self::Dom7 => &[0, 4, 7, 10],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Dim => "dim",
            Self::Aug => "aug",
            Self::Sus4 => "sus4",
            Self::Maj7 => "maj7",
            Self::Min7 => "min7",
            Self::Dom7 => "dom7",
        }
    }

    /// Parse a quality name, falling back to major on anything unknown.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(quality = name, "unknown chord quality, using major");
            Self::Major
        })
    }
}

impl FromStr for ChordQuality {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" => Ok(Self::Major),
            "minor" | "min" | "m" => Ok(Self::Minor),
            "dim" | "diminished" => Ok(Self::Dim),
            "aug" | "augmented" => Ok(Self::Aug),
            "sus4" => Ok(Self::Sus4),
            "maj7" => Ok(Self::Maj7),
            "min7" | "m7" => Ok(Self::Min7),
            "dom7" | "7" => Ok(Self::Dom7),
            _ => Err(ChordError::UnknownQuality(s.to_string())),
        }
    }
}

impl From<String> for ChordQuality {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

impl From<ChordQuality> for String {
    fn from(quality: ChordQuality) -> Self {
        quality.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_qualities() {
        assert_eq!("maj7".parse::<ChordQuality>(), Ok(ChordQuality::Maj7));
        assert_eq!("Minor".parse::<ChordQuality>(), Ok(ChordQuality::Minor));
        assert_eq!("dom7".parse::<ChordQuality>(), Ok(ChordQuality::Dom7));
        assert_eq!("7".parse::<ChordQuality>(), Ok(ChordQuality::Dom7));
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!(
            "lydian".parse::<ChordQuality>(),
            Err(ChordError::UnknownQuality("lydian".to_string()))
        );
    }

    #[test]
    fn lenient_parse_falls_back_to_major() {
        assert_eq!(ChordQuality::parse_lenient("lydian"), ChordQuality::Major);
        assert_eq!(ChordQuality::parse_lenient("sus4"), ChordQuality::Sus4);
        assert_eq!(ChordQuality::from("nonsense".to_string()), ChordQuality::Major);
    }

    #[test]
    fn sevenths_have_four_tones() {
        for quality in [ChordQuality::Maj7, ChordQuality::Min7, ChordQuality::Dom7] {
            assert_eq!(quality.intervals().len(), 4);
        }
        assert_eq!(ChordQuality::Major.intervals(), &[0, 4, 7]);
    }
}
