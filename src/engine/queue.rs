//! Lock-free command queue between the control loop and an engine thread.
//!
//! The control loop owns the [`Producer`] and uses it directly as an
//! [`AudioEngine`]: every call is a wait-free push. The engine side drains
//! the [`Consumer`] through [`CommandReceiver`]. A full queue is reported
//! for that command only, so a stalled engine never stalls the frame loop.

use rtrb::{Consumer, Producer, RingBuffer};

use crate::chord::Chord;

use super::{AudioEngine, EngineCommand, EngineError, Percussion};

/// Create a command queue holding up to `capacity` pending commands.
pub fn command_queue(capacity: usize) -> (Producer<EngineCommand>, Consumer<EngineCommand>) {
    RingBuffer::new(capacity)
}

fn push(producer: &mut Producer<EngineCommand>, command: EngineCommand) -> Result<(), EngineError> {
    if producer.is_abandoned() {
        return Err(EngineError::Disconnected);
    }
    producer.push(command).map_err(|_| EngineError::QueueFull)
}

impl AudioEngine for Producer<EngineCommand> {
    fn play_percussive(&mut self, sample: Percussion) -> Result<(), EngineError> {
        push(self, EngineCommand::Percussive { sample })
    }

    fn play_chord(&mut self, chord: &Chord) -> Result<(), EngineError> {
        push(self, EngineCommand::Chord { chord: *chord })
    }

    fn set_filter(&mut self, cutoff_hz: f32, resonance: f32) -> Result<(), EngineError> {
        push(
            self,
            EngineCommand::Filter {
                cutoff_hz,
                resonance,
            },
        )
    }
}

pub trait CommandReceiver {
    fn pop(&mut self) -> Option<EngineCommand>;

    /// Whether the control loop has hung up.
    fn is_closed(&self) -> bool;
}

impl CommandReceiver for Consumer<EngineCommand> {
    fn pop(&mut self) -> Option<EngineCommand> {
        Consumer::pop(self).ok()
    }

    fn is_closed(&self) -> bool {
        self.is_abandoned() && self.is_empty()
    }
}
