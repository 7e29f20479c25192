// Purpose: debounce per-frame gesture conditions into discrete events
// Channels are independent; each enforces its own cooldown

pub mod channel;

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::engine::Percussion;

pub use channel::{TriggerChannel, TriggerPolicy};

/// Named trigger source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// One-shot drum sample
    Percussion(Percussion),
    /// Step the sustained pad to the next chord
    ChordAdvance,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percussion(sample) => sample.as_str(),
            Self::ChordAdvance => "chord-advance",
        }
    }
}

/// The set of trigger channels owned by one controller.
#[derive(Debug, Clone, Default)]
pub struct TriggerBank {
    channels: HashMap<Channel, TriggerChannel>,
}

impl TriggerBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a channel, replacing any existing one with the same name.
    pub fn register(&mut self, channel: Channel, trigger: TriggerChannel) {
        self.channels.insert(channel, trigger);
    }

    pub fn get(&self, channel: Channel) -> Option<&TriggerChannel> {
        self.channels.get(&channel)
    }

    /// Evaluate a channel for this frame. Unregistered channels never fire.
    pub fn evaluate(&mut self, channel: Channel, condition: bool, now: Duration) -> bool {
        let Some(trigger) = self.channels.get_mut(&channel) else {
            return false;
        };
        let fired = trigger.evaluate(condition, now);
        if fired {
            debug!(channel = channel.as_str(), at = ?now, "trigger fired");
        }
        fired
    }

    pub fn reset(&mut self) {
        self.channels.values_mut().for_each(TriggerChannel::reset);
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
