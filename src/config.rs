//! Controller configuration.
//!
//! Every threshold the control loop uses lives here, passed to the
//! controller at construction. [`ControlConfig::default`] reproduces the
//! tuned values; a TOML file can override any subset of them.
//!
//! ```toml
//! policy = "level"
//!
//! [chord]
//! hand = "right"
//! threshold = 0.8
//! cooldown_ms = 2000
//!
//! [[percussion]]
//! hand = "left"
//! finger = "index"
//! sample = "kick"
//! cooldown_ms = 200
//!
//! [[progression]]
//! root = "C"
//! quality = "major"
//! octave = 4
//! ```

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::path::Path;

use crate::chord::{Chord, ChordError, ChordProgression};
use crate::engine::Percussion;
use crate::gesture::{Finger, SpanRange};
use crate::landmarks::HandSide;
use crate::mapping::CutoffMap;
use crate::trigger::TriggerPolicy;

/// Hand span above which the pad advances to the next chord
pub const CHORD_SPAN_THRESHOLD: f32 = 0.8;
pub const CHORD_COOLDOWN_MS: u64 = 2000;
pub const PERCUSSION_COOLDOWN_MS: u64 = 200;

/// A bent finger on one hand fires one drum sample.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercussionBinding {
    pub hand: HandSide,
    pub finger: Finger,
    pub sample: Percussion,
    #[cfg_attr(feature = "serde", serde(default = "default_percussion_cooldown_ms"))]
    pub cooldown_ms: u64,
}

#[cfg(feature = "serde")]
fn default_percussion_cooldown_ms() -> u64 {
    PERCUSSION_COOLDOWN_MS
}

impl PercussionBinding {
    pub fn new(hand: HandSide, finger: Finger, sample: Percussion, cooldown_ms: u64) -> Self {
        Self {
            hand,
            finger,
            sample,
            cooldown_ms,
        }
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordAdvanceConfig {
    /// Hand whose span advances the chord
    pub hand: HandSide,
    /// Span must exceed this to advance
    pub threshold: f32,
    pub cooldown_ms: u64,
}

impl Default for ChordAdvanceConfig {
    fn default() -> Self {
        Self {
            hand: HandSide::Right,
            threshold: CHORD_SPAN_THRESHOLD,
            cooldown_ms: CHORD_COOLDOWN_MS,
        }
    }
}

impl ChordAdvanceConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Hand whose pinch drives the cutoff
    pub pinch_hand: HandSide,
    /// Hand whose span drives the resonance
    pub resonance_hand: HandSide,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            pinch_hand: HandSide::Left,
            resonance_hand: HandSide::Right,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ControlConfig {
    pub span: SpanRange,
    pub cutoff: CutoffMap,
    /// Evaluated left hand first, then right, in listed order
    pub percussion: Vec<PercussionBinding>,
    pub chord: ChordAdvanceConfig,
    pub filter: FilterConfig,
    /// Applies to every trigger channel
    pub policy: TriggerPolicy,
    pub progression: Vec<Chord>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            span: SpanRange::default(),
            cutoff: CutoffMap::default(),
            percussion: vec![
                PercussionBinding::new(HandSide::Left, Finger::Index, Percussion::Kick, 200),
                PercussionBinding::new(HandSide::Left, Finger::Middle, Percussion::Snare, 250),
                PercussionBinding::new(HandSide::Left, Finger::Ring, Percussion::HiHat, 200),
                PercussionBinding::new(HandSide::Right, Finger::Index, Percussion::Clap, 400),
            ],
            chord: ChordAdvanceConfig::default(),
            filter: FilterConfig::default(),
            policy: TriggerPolicy::Level,
            progression: ChordProgression::default().chords().to_vec(),
        }
    }
}

impl ControlConfig {
    /// Read a TOML config; missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&content)
    }

    #[cfg(feature = "serde")]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ControlConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make a mapping or trigger ill-defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cutoff = &self.cutoff;
        if !(cutoff.min_distance.is_finite() && cutoff.min_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cutoff.min_distance must be positive, got {}",
                cutoff.min_distance
            )));
        }
        if !(cutoff.max_distance.is_finite() && cutoff.max_distance > cutoff.min_distance) {
            return Err(ConfigError::Invalid(format!(
                "cutoff.max_distance must exceed min_distance ({} <= {})",
                cutoff.max_distance, cutoff.min_distance
            )));
        }
        if !(cutoff.max_hz.is_finite() && cutoff.span_hz.is_finite()) {
            return Err(ConfigError::Invalid("cutoff frequencies must be finite".into()));
        }
        if !(self.span.min_px.is_finite()
            && self.span.max_px.is_finite()
            && self.span.max_px > self.span.min_px)
        {
            return Err(ConfigError::Invalid(format!(
                "span.max_px must exceed span.min_px ({} <= {})",
                self.span.max_px, self.span.min_px
            )));
        }
        if !self.chord.threshold.is_finite() {
            return Err(ConfigError::Invalid("chord.threshold must be finite".into()));
        }
        for (i, binding) in self.percussion.iter().enumerate() {
            if self.percussion[..i].iter().any(|b| b.sample == binding.sample) {
                return Err(ConfigError::Invalid(format!(
                    "sample {} is bound more than once",
                    binding.sample.as_str()
                )));
            }
        }
        self.chord_progression()?;
        Ok(())
    }

    pub fn chord_progression(&self) -> Result<ChordProgression, ConfigError> {
        ChordProgression::new(self.progression.clone()).map_err(ConfigError::Chord)
    }
}

/// Errors that can occur when loading or validating a config
#[derive(Debug)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    Io(std::io::Error),
    #[cfg(feature = "serde")]
    Parse(toml::de::Error),
    Chord(ChordError),
    /// A value is out of its usable range
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            ConfigError::Io(err) => write!(f, "Failed to read config: {}", err),
            #[cfg(feature = "serde")]
            ConfigError::Parse(err) => write!(f, "Failed to parse config: {}", err),
            ConfigError::Chord(err) => write!(f, "Invalid chord progression: {}", err),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            ConfigError::Io(err) => Some(err),
            #[cfg(feature = "serde")]
            ConfigError::Parse(err) => Some(err),
            ConfigError::Chord(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}
