use tracing::debug;

use super::{Chord, ChordError, ChordQuality, NoteName, OCTAVE_RANGE};

/// Fixed, non-empty, ordered list of chords for the pad to cycle through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordProgression {
    chords: Vec<Chord>,
}

impl ChordProgression {
    /// Fails on an empty list or a root octave outside [`OCTAVE_RANGE`].
    pub fn new(chords: Vec<Chord>) -> Result<Self, ChordError> {
        if chords.is_empty() {
            return Err(ChordError::EmptyProgression);
        }
        if let Some(chord) = chords.iter().find(|c| !OCTAVE_RANGE.contains(&c.octave)) {
            return Err(ChordError::OctaveOutOfRange(chord.octave));
        }
        Ok(Self { chords })
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// Always false: construction rejects empty progressions.
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Chord at `index`, wrapping around.
    pub fn get(&self, index: usize) -> Chord {
        self.chords[index % self.chords.len()]
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }
}

impl Default for ChordProgression {
    /// I - IV(maj7) - V(7) - vi in C.
    fn default() -> Self {
        Self {
            chords: vec![
                Chord::new(NoteName::C, ChordQuality::Major, 4),
                Chord::new(NoteName::F, ChordQuality::Maj7, 4),
                Chord::new(NoteName::G, ChordQuality::Dom7, 4),
                Chord::new(NoteName::A, ChordQuality::Minor, 4),
            ],
        }
    }
}

/// Position of the pad within its progression.
///
/// Only a chord-advance trigger moves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordState {
    progression: ChordProgression,
    index: usize,
}

impl ChordState {
    pub fn new(progression: ChordProgression) -> Self {
        Self {
            progression,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Chord {
        self.progression.get(self.index)
    }

    /// Step to the next chord (wrapping) and return it.
    pub fn advance(&mut self) -> Chord {
        self.index = (self.index + 1) % self.progression.len();
        let chord = self.current();
        debug!(index = self.index, chord = %chord, "chord advanced");
        chord
    }

    pub fn progression(&self) -> &ChordProgression {
        &self.progression
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Default for ChordState {
    fn default() -> Self {
        Self::new(ChordProgression::default())
    }
}
