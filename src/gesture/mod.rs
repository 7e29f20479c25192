//! Gesture extraction from a single hand frame.
//!
//! [`extract`] turns one [`HandFrame`] into a [`GestureData`] snapshot. It is
//! pure and bounded: no state, no allocation, no failure. Tracking dropout is
//! routine at camera rate, so a missing joint degrades to a neutral value
//! (0.0 distance, unbent finger, 0.0 span) instead of an error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::landmarks::{HandFrame, LandmarkIndex};
use crate::mapping::normalize;

pub const SPAN_MIN_PX: f32 = 20.0;
pub const SPAN_MAX_PX: f32 = 150.0;

/// Gesture metrics derived from one hand in one frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureData {
    /// Thumb tip to index tip, in pixels
    pub pinch_distance: f32,
    pub index_bent: bool,
    pub middle_bent: bool,
    pub ring_bent: bool,
    /// Average pairwise landmark distance, normalized to 0.0-1.0
    pub hand_span: f32,
}

impl GestureData {
    pub fn is_bent(&self, finger: Finger) -> bool {
        match finger {
            Finger::Index => self.index_bent,
            Finger::Middle => self.middle_bent,
            Finger::Ring => self.ring_bent,
        }
    }
}

/// Fingers with a bend gesture.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
}

impl Finger {
    pub fn pip(&self) -> LandmarkIndex {
        match self {
            Self::Index => LandmarkIndex::IndexFingerPip,
            Self::Middle => LandmarkIndex::MiddleFingerPip,
            Self::Ring => LandmarkIndex::RingFingerPip,
        }
    }

    pub fn tip(&self) -> LandmarkIndex {
        match self {
            Self::Index => LandmarkIndex::IndexFingerTip,
            Self::Middle => LandmarkIndex::MiddleFingerTip,
            Self::Ring => LandmarkIndex::RingFingerTip,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
        }
    }
}

/// Pixel bounds for hand span normalization.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanRange {
    /// Average pairwise distance that reads as span 0.0
    pub min_px: f32,
    /// Average pairwise distance that reads as span 1.0
    pub max_px: f32,
}

impl Default for SpanRange {
    fn default() -> Self {
        Self {
            min_px: SPAN_MIN_PX,
            max_px: SPAN_MAX_PX,
        }
    }
}

/// Extract gestures using the default span range.
pub fn extract(frame: &HandFrame) -> GestureData {
    extract_with(frame, &SpanRange::default())
}

pub fn extract_with(frame: &HandFrame, span: &SpanRange) -> GestureData {
    GestureData {
        pinch_distance: pinch_distance(frame),
        index_bent: finger_bent(frame, Finger::Index),
        middle_bent: finger_bent(frame, Finger::Middle),
        ring_bent: finger_bent(frame, Finger::Ring),
        hand_span: hand_span(frame, span),
    }
}

/// Thumb tip to index tip distance, 0.0 if either is missing.
pub fn pinch_distance(frame: &HandFrame) -> f32 {
    frame.distance(LandmarkIndex::ThumbTip, LandmarkIndex::IndexFingerTip)
}

/// A finger reads as bent when its PIP joint sits above its tip in image
/// space (`pip.y < tip.y`, y grows downward).
pub fn finger_bent(frame: &HandFrame, finger: Finger) -> bool {
    match (frame.get(finger.pip()), frame.get(finger.tip())) {
        (Some(pip), Some(tip)) => pip.y < tip.y,
        _ => false,
    }
}

/// Mean distance over all pairs of present landmarks.
///
/// `None` with fewer than two landmarks.
pub fn average_pairwise_distance(frame: &HandFrame) -> Option<f32> {
    let mut total = 0.0f32;
    let mut pairs = 0u32;

    let mut rest = frame.iter();
    while let Some(a) = rest.next() {
        for b in rest.clone() {
            total += a.distance(b);
            pairs += 1;
        }
    }

    (pairs > 0).then(|| total / pairs as f32)
}

/// Normalized hand openness, 0.0 with fewer than two landmarks.
pub fn hand_span(frame: &HandFrame, span: &SpanRange) -> f32 {
    average_pairwise_distance(frame)
        .map(|avg| normalize(avg, span.min_px, span.max_px))
        .unwrap_or(0.0)
}
