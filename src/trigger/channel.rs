use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
| policy | fires when                                    | held condition      |
| ------ | --------------------------------------------- | ------------------- |
| Level  | condition && cooldown elapsed                 | once per cooldown   |
| Edge   | condition was false last frame && cooldown    | once, until release |
*/

/// How a channel treats a condition that stays true across frames.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerPolicy {
    /// Re-fire at the cooldown rate while the condition holds
    #[default]
    Level,
    /// Fire only on a false -> true transition
    Edge,
}

/// One debounced gesture source.
///
/// Timestamps are offsets from session start. A channel that never fired
/// treats its last fire as infinitely far in the past, so the first
/// satisfied condition fires immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerChannel {
    cooldown: Duration,
    policy: TriggerPolicy,
    last_fired_at: Option<Duration>,
    /// Condition seen on the previous evaluation (edge policy only)
    was_active: bool,
}

impl TriggerChannel {
    /// Level-triggered channel.
    pub fn new(cooldown: Duration) -> Self {
        Self::with_policy(cooldown, TriggerPolicy::Level)
    }

    pub fn with_policy(cooldown: Duration, policy: TriggerPolicy) -> Self {
        Self {
            cooldown,
            policy,
            last_fired_at: None,
            was_active: false,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn policy(&self) -> TriggerPolicy {
        self.policy
    }

    pub fn last_fired_at(&self) -> Option<Duration> {
        self.last_fired_at
    }

    /// Whether a fire at `now` would respect the cooldown.
    ///
    /// A `now` earlier than the last fire counts as no time elapsed.
    pub fn is_ready(&self, now: Duration) -> bool {
        match self.last_fired_at {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.cooldown,
        }
    }

    /// Evaluate this frame's condition. Returns true when the channel fires.
    ///
    /// Under [`TriggerPolicy::Level`] the channel state only changes on a
    /// fire.
    pub fn evaluate(&mut self, condition: bool, now: Duration) -> bool {
        let armed = match self.policy {
            TriggerPolicy::Level => condition,
            TriggerPolicy::Edge => {
                let rising = condition && !self.was_active;
                self.was_active = condition;
                rising
            }
        };

        if armed && self.is_ready(now) {
            self.last_fired_at = Some(now);
            true
        } else {
            false
        }
    }

    /// Forget the last fire, as at process start.
    pub fn reset(&mut self) {
        self.last_fired_at = None;
        self.was_active = false;
    }
}
