/*
Hand Landmark Ordinals
======================

The 21 points reported by the hand-landmark detector, in detector order.
Ordinals are stable: downstream metrics look joints up by ordinal.

  0  WRIST
  1- 4  THUMB   CMC  MCP  IP   TIP
  5- 8  INDEX   MCP  PIP  DIP  TIP
  9-12  MIDDLE  MCP  PIP  DIP  TIP
 13-16  RING    MCP  PIP  DIP  TIP
 17-20  PINKY   MCP  PIP  DIP  TIP
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of tracked points on one hand.
pub const LANDMARK_COUNT: usize = 21;

/// One of the 21 named anatomical points on a hand.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkIndex {
    /// Every landmark, in ordinal order.
    pub const ALL: [LandmarkIndex; LANDMARK_COUNT] = [
        Self::Wrist,
        Self::ThumbCmc,
        Self::ThumbMcp,
        Self::ThumbIp,
        Self::ThumbTip,
        Self::IndexFingerMcp,
        Self::IndexFingerPip,
        Self::IndexFingerDip,
        Self::IndexFingerTip,
        Self::MiddleFingerMcp,
        Self::MiddleFingerPip,
        Self::MiddleFingerDip,
        Self::MiddleFingerTip,
        Self::RingFingerMcp,
        Self::RingFingerPip,
        Self::RingFingerDip,
        Self::RingFingerTip,
        Self::PinkyMcp,
        Self::PinkyPip,
        Self::PinkyDip,
        Self::PinkyTip,
    ];

    /// Table slot for this landmark (0-20).
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Look up a landmark by detector ordinal.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumb-cmc",
            Self::ThumbMcp => "thumb-mcp",
            Self::ThumbIp => "thumb-ip",
            Self::ThumbTip => "thumb-tip",
            Self::IndexFingerMcp => "index-mcp",
            Self::IndexFingerPip => "index-pip",
            Self::IndexFingerDip => "index-dip",
            Self::IndexFingerTip => "index-tip",
            Self::MiddleFingerMcp => "middle-mcp",
            Self::MiddleFingerPip => "middle-pip",
            Self::MiddleFingerDip => "middle-dip",
            Self::MiddleFingerTip => "middle-tip",
            Self::RingFingerMcp => "ring-mcp",
            Self::RingFingerPip => "ring-pip",
            Self::RingFingerDip => "ring-dip",
            Self::RingFingerTip => "ring-tip",
            Self::PinkyMcp => "pinky-mcp",
            Self::PinkyPip => "pinky-pip",
            Self::PinkyDip => "pinky-dip",
            Self::PinkyTip => "pinky-tip",
        }
    }
}

impl From<LandmarkIndex> for u8 {
    fn from(index: LandmarkIndex) -> Self {
        index as u8
    }
}

impl TryFrom<u8> for LandmarkIndex {
    type Error = UnknownLandmark;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal as usize).ok_or(UnknownLandmark(ordinal))
    }
}

/// Ordinal outside the 0-20 landmark range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownLandmark(pub u8);

impl std::fmt::Display for UnknownLandmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown landmark ordinal {} (expected 0-{})",
            self.0,
            LANDMARK_COUNT - 1
        )
    }
}

impl std::error::Error for UnknownLandmark {}
