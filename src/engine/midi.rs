//! General MIDI rendition of engine commands.
//!
//! Lets any GM synth or DAW stand in for the sound engine:
//!
//! | command    | MIDI                                                        |
//! |------------|-------------------------------------------------------------|
//! | percussive | note-on + note-off on the drum channel (GM key per sample)  |
//! | chord      | note-off for the held chord, note-on for each new chord tone |
//! | filter     | CC 74 (cutoff, log-scaled) and CC 71 (resonance), on change  |

use crate::chord::Chord;
use crate::mapping::clamp01;

use super::{AudioEngine, EngineError, Percussion};

/// GM drum channel (channel 10, zero-based)
pub const DRUM_CHANNEL: u8 = 9;
pub const CC_CUTOFF: u8 = 74;
pub const CC_RESONANCE: u8 = 71;

const CUTOFF_FLOOR_HZ: f32 = 20.0;
const CUTOFF_CEILING_HZ: f32 = 20_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
}

impl MidiEvent {
    /// Raw 3-byte channel message.
    pub fn to_bytes(&self) -> [u8; 3] {
        match *self {
            MidiEvent::NoteOn {
                channel,
                key,
                velocity,
            } => [0x90 | (channel & 0x0F), key & 0x7F, velocity & 0x7F],
            MidiEvent::NoteOff {
                channel,
                key,
                velocity,
            } => [0x80 | (channel & 0x0F), key & 0x7F, velocity & 0x7F],
            MidiEvent::ControlChange {
                channel,
                controller,
                value,
            } => [0xB0 | (channel & 0x0F), controller & 0x7F, value & 0x7F],
        }
    }
}

/// GM percussion key for a drum sample.
pub fn drum_key(sample: Percussion) -> u8 {
    match sample {
        Percussion::Kick => 36,
        Percussion::Snare => 38,
        Percussion::Clap => 39,
        Percussion::HiHat => 42,
    }
}

/// Cutoff in Hz to a 7-bit controller value on a log scale (20 Hz-20 kHz).
pub fn cutoff_to_cc(cutoff_hz: f32) -> u8 {
    let hz = if cutoff_hz.is_nan() {
        CUTOFF_FLOOR_HZ
    } else {
        cutoff_hz.clamp(CUTOFF_FLOOR_HZ, CUTOFF_CEILING_HZ)
    };
    let position = (hz / CUTOFF_FLOOR_HZ).ln() / (CUTOFF_CEILING_HZ / CUTOFF_FLOOR_HZ).ln();
    (position * 127.0).round() as u8
}

pub fn resonance_to_cc(resonance: f32) -> u8 {
    (clamp01(resonance) * 127.0).round() as u8
}

/// Anything that can take MIDI events.
pub trait MidiSink {
    fn send(&mut self, event: MidiEvent) -> Result<(), EngineError>;
}

impl MidiSink for Vec<MidiEvent> {
    fn send(&mut self, event: MidiEvent) -> Result<(), EngineError> {
        self.push(event);
        Ok(())
    }
}

/// [`AudioEngine`] that speaks General MIDI.
pub struct MidiEngine<S: MidiSink> {
    sink: S,
    /// Channel for the sustained pad
    pub pad_channel: u8,
    pub pad_velocity: u8,
    pub drum_velocity: u8,
    /// Keys of the chord currently sounding
    held: Vec<u8>,
    last_cutoff_cc: Option<u8>,
    last_resonance_cc: Option<u8>,
}

impl<S: MidiSink> MidiEngine<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            pad_channel: 0,
            pad_velocity: 90,
            drum_velocity: 100,
            held: Vec::with_capacity(8),
            last_cutoff_cc: None,
            last_resonance_cc: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Keys of the chord currently sounding.
    pub fn held_notes(&self) -> &[u8] {
        &self.held
    }

    /// Release the sustained chord.
    pub fn release_chord(&mut self) -> Result<(), EngineError> {
        while let Some(&key) = self.held.last() {
            self.sink.send(MidiEvent::NoteOff {
                channel: self.pad_channel,
                key,
                velocity: 0,
            })?;
            self.held.pop();
        }
        Ok(())
    }

    fn send_cc(&mut self, controller: u8, value: u8) -> Result<(), EngineError> {
        self.sink.send(MidiEvent::ControlChange {
            channel: self.pad_channel,
            controller,
            value,
        })
    }
}

impl<S: MidiSink> AudioEngine for MidiEngine<S> {
    fn play_percussive(&mut self, sample: Percussion) -> Result<(), EngineError> {
        let key = drum_key(sample);
        self.sink.send(MidiEvent::NoteOn {
            channel: DRUM_CHANNEL,
            key,
            velocity: self.drum_velocity,
        })?;
        self.sink.send(MidiEvent::NoteOff {
            channel: DRUM_CHANNEL,
            key,
            velocity: 0,
        })
    }

    fn play_chord(&mut self, chord: &Chord) -> Result<(), EngineError> {
        self.release_chord()?;
        for key in chord.midi_notes() {
            self.sink.send(MidiEvent::NoteOn {
                channel: self.pad_channel,
                key,
                velocity: self.pad_velocity,
            })?;
            self.held.push(key);
        }
        Ok(())
    }

    fn set_filter(&mut self, cutoff_hz: f32, resonance: f32) -> Result<(), EngineError> {
        let cutoff = cutoff_to_cc(cutoff_hz);
        if self.last_cutoff_cc != Some(cutoff) {
            self.send_cc(CC_CUTOFF, cutoff)?;
            self.last_cutoff_cc = Some(cutoff);
        }
        let resonance = resonance_to_cc(resonance);
        if self.last_resonance_cc != Some(resonance) {
            self.send_cc(CC_RESONANCE, resonance)?;
            self.last_resonance_cc = Some(resonance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{ChordQuality, NoteName};

    #[test]
    fn drum_hit_is_note_on_then_off() {
        let mut engine = MidiEngine::new(Vec::new());
        engine.play_percussive(Percussion::Kick).unwrap();
        assert_eq!(
            engine.sink(),
            &vec![
                MidiEvent::NoteOn {
                    channel: 9,
                    key: 36,
                    velocity: 100
                },
                MidiEvent::NoteOff {
                    channel: 9,
                    key: 36,
                    velocity: 0
                },
            ]
        );
    }

    #[test]
    fn new_chord_releases_previous() {
        let mut engine = MidiEngine::new(Vec::new());
        engine
            .play_chord(&Chord::new(NoteName::C, ChordQuality::Major, 4))
            .unwrap();
        assert_eq!(engine.held_notes(), &[60, 64, 67]);

        engine
            .play_chord(&Chord::new(NoteName::A, ChordQuality::Minor, 4))
            .unwrap();
        assert_eq!(engine.held_notes(), &[69, 72, 76]);

        let offs: Vec<u8> = engine
            .sink()
            .iter()
            .filter_map(|e| match e {
                MidiEvent::NoteOff { key, .. } => Some(*key),
                _ => None,
            })
            .collect();
        assert_eq!(offs.len(), 3);
        assert!(offs.contains(&60) && offs.contains(&64) && offs.contains(&67));
    }

    #[test]
    fn filter_cc_only_on_change() {
        let mut engine = MidiEngine::new(Vec::new());
        engine.set_filter(20_000.0, 0.5).unwrap();
        engine.set_filter(20_000.0, 0.5).unwrap();
        assert_eq!(engine.sink().len(), 2);

        engine.set_filter(20.0, 0.5).unwrap();
        assert_eq!(
            engine.sink().last(),
            Some(&MidiEvent::ControlChange {
                channel: 0,
                controller: CC_CUTOFF,
                value: 0
            })
        );
    }

    #[test]
    fn cc_scaling() {
        assert_eq!(cutoff_to_cc(20.0), 0);
        assert_eq!(cutoff_to_cc(10.0), 0);
        assert_eq!(cutoff_to_cc(20_000.0), 127);
        assert_eq!(cutoff_to_cc(f32::NAN), 0);
        assert_eq!(resonance_to_cc(0.0), 0);
        assert_eq!(resonance_to_cc(1.0), 127);
        assert_eq!(resonance_to_cc(3.0), 127);
    }

    #[test]
    fn raw_bytes() {
        let on = MidiEvent::NoteOn {
            channel: 9,
            key: 36,
            velocity: 100,
        };
        assert_eq!(on.to_bytes(), [0x99, 36, 100]);
        let cc = MidiEvent::ControlChange {
            channel: 0,
            controller: 74,
            value: 64,
        };
        assert_eq!(cc.to_bytes(), [0xB0, 74, 64]);
    }
}
