//! Control loop - one tick per camera frame
//!
//! Each tick:
//!
//! 1. assigns left/right hands by wrist x
//! 2. extracts gestures for both hands
//! 3. evaluates percussive bindings (left hand first) and fires drum hits
//! 4. evaluates chord advance on hand span and steps the progression
//! 5. sends the filter cutoff/resonance, every frame
//!
//! Commands are built first and dispatched after, in that fixed order. A
//! failed dispatch is reported in the [`TickReport`] and never rolls back
//! trigger or chord state: a fired channel stays in cooldown whether or not
//! the engine accepted the hit.

use std::time::Duration;

use tracing::warn;

use crate::chord::ChordState;
use crate::config::{ConfigError, ControlConfig, PercussionBinding};
use crate::engine::{AudioEngine, EngineCommand, EngineError};
use crate::gesture::{extract_with, GestureData};
use crate::landmarks::{HandFrame, HandPair, HandSide};
use crate::mapping::resonance_from_span;
use crate::trigger::{Channel, TriggerBank, TriggerChannel};

/// Gestures of both hands for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandGestures {
    pub left: GestureData,
    pub right: GestureData,
}

impl HandGestures {
    pub fn get(&self, side: HandSide) -> &GestureData {
        match side {
            HandSide::Left => &self.left,
            HandSide::Right => &self.right,
        }
    }
}

/// A command the engine rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchFailure {
    pub command: EngineCommand,
    pub error: EngineError,
}

/// Outcome of one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    pub gestures: HandGestures,
    /// Commands the engine accepted, in dispatch order
    pub dispatched: Vec<EngineCommand>,
    pub failures: Vec<DispatchFailure>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Per-frame driver owning all trigger and chord state.
pub struct Controller {
    config: ControlConfig,
    /// Percussive bindings, left hand first
    bindings: Vec<PercussionBinding>,
    triggers: TriggerBank,
    chords: ChordState,
}

impl Controller {
    pub fn new(config: ControlConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut triggers = TriggerBank::new();
        for binding in &config.percussion {
            triggers.register(
                Channel::Percussion(binding.sample),
                TriggerChannel::with_policy(binding.cooldown(), config.policy),
            );
        }
        triggers.register(
            Channel::ChordAdvance,
            TriggerChannel::with_policy(config.chord.cooldown(), config.policy),
        );

        let mut bindings = config.percussion.clone();
        bindings.sort_by_key(|b| b.hand == HandSide::Right);

        let chords = ChordState::new(config.chord_progression()?);

        Ok(Self {
            config,
            bindings,
            triggers,
            chords,
        })
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn chords(&self) -> &ChordState {
        &self.chords
    }

    pub fn triggers(&self) -> &TriggerBank {
        &self.triggers
    }

    /// Sound the current chord so the pad plays before any gesture.
    pub fn start<E: AudioEngine + ?Sized>(&mut self, engine: &mut E) -> Result<(), EngineError> {
        engine.play_chord(&self.chords.current())
    }

    /// Run one frame from the detector's two hands.
    pub fn tick<E: AudioEngine + ?Sized>(
        &mut self,
        first: HandFrame,
        second: HandFrame,
        now: Duration,
        engine: &mut E,
    ) -> TickReport {
        self.tick_pair(&HandPair::assign(first, second), now, engine)
    }

    /// Run one frame from already-labelled hands.
    pub fn tick_pair<E: AudioEngine + ?Sized>(
        &mut self,
        hands: &HandPair,
        now: Duration,
        engine: &mut E,
    ) -> TickReport {
        let (gestures, commands) = self.plan(hands, now);

        let mut report = TickReport {
            gestures,
            dispatched: Vec::with_capacity(commands.len()),
            failures: Vec::new(),
        };
        for command in commands {
            match command.dispatch(engine) {
                Ok(()) => report.dispatched.push(command),
                Err(error) => {
                    warn!(?command, %error, "engine rejected command");
                    report.failures.push(DispatchFailure { command, error });
                }
            }
        }
        report
    }

    /// Advance trigger and chord state for one frame and return the
    /// commands to send, without sending them.
    pub fn plan(&mut self, hands: &HandPair, now: Duration) -> (HandGestures, Vec<EngineCommand>) {
        let gestures = HandGestures {
            left: extract_with(&hands.left, &self.config.span),
            right: extract_with(&hands.right, &self.config.span),
        };
        let mut commands = Vec::with_capacity(self.bindings.len() + 2);

        for binding in &self.bindings {
            let bent = gestures.get(binding.hand).is_bent(binding.finger);
            if self
                .triggers
                .evaluate(Channel::Percussion(binding.sample), bent, now)
            {
                commands.push(EngineCommand::Percussive {
                    sample: binding.sample,
                });
            }
        }

        let chord_cfg = &self.config.chord;
        let open = gestures.get(chord_cfg.hand).hand_span > chord_cfg.threshold;
        if self.triggers.evaluate(Channel::ChordAdvance, open, now) {
            commands.push(EngineCommand::Chord {
                chord: self.chords.advance(),
            });
        }

        let filter = &self.config.filter;
        commands.push(EngineCommand::Filter {
            cutoff_hz: self
                .config
                .cutoff
                .cutoff(gestures.get(filter.pinch_hand).pinch_distance),
            resonance: resonance_from_span(gestures.get(filter.resonance_hand).hand_span),
        });

        (gestures, commands)
    }

    /// Forget all cooldowns and return to the first chord.
    pub fn reset(&mut self) {
        self.triggers.reset();
        self.chords.reset();
    }
}
