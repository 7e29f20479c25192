use crate::chord::Chord;

use super::{AudioEngine, EngineCommand, EngineError, Percussion};

/// Engine that keeps every command it receives, in order.
///
/// Useful for offline runs and for checking what a controller dispatched.
#[derive(Debug, Default, Clone)]
pub struct RecordingEngine {
    commands: Vec<EngineCommand>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    /// Drum hits received so far.
    pub fn percussion(&self) -> impl Iterator<Item = Percussion> + '_ {
        self.commands.iter().filter_map(|c| match c {
            EngineCommand::Percussive { sample } => Some(*sample),
            _ => None,
        })
    }

    /// Chords received so far.
    pub fn chords(&self) -> impl Iterator<Item = Chord> + '_ {
        self.commands.iter().filter_map(|c| match c {
            EngineCommand::Chord { chord } => Some(*chord),
            _ => None,
        })
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<EngineCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl AudioEngine for RecordingEngine {
    fn play_percussive(&mut self, sample: Percussion) -> Result<(), EngineError> {
        self.commands.push(EngineCommand::Percussive { sample });
        Ok(())
    }

    fn play_chord(&mut self, chord: &Chord) -> Result<(), EngineError> {
        self.commands.push(EngineCommand::Chord { chord: *chord });
        Ok(())
    }

    fn set_filter(&mut self, cutoff_hz: f32, resonance: f32) -> Result<(), EngineError> {
        self.commands.push(EngineCommand::Filter {
            cutoff_hz,
            resonance,
        });
        Ok(())
    }
}
