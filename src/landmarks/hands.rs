#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::frame::HandFrame;

/// Which hand, after left/right assignment.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSide {
    Left,
    Right,
}

impl HandSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// The two hands of one camera frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandPair {
    pub left: HandFrame,
    pub right: HandFrame,
}

impl HandPair {
    /// Pair already-labelled hands.
    pub fn new(left: HandFrame, right: HandFrame) -> Self {
        Self { left, right }
    }

    /// Assign left/right from two detector hands.
    ///
    /// The hand whose wrist has the smaller x is "left". A lone detected
    /// hand is always "left". Without both wrists the detector order is
    /// kept.
    pub fn assign(first: HandFrame, second: HandFrame) -> Self {
        match (first.is_empty(), second.is_empty()) {
            (true, false) => return Self::new(second, first),
            (false, true) | (true, true) => return Self::new(first, second),
            (false, false) => {}
        }

        match (first.wrist(), second.wrist()) {
            (Some(a), Some(b)) if b.x < a.x => Self::new(second, first),
            _ => Self::new(first, second),
        }
    }

    pub fn get(&self, side: HandSide) -> &HandFrame {
        match side {
            HandSide::Left => &self.left,
            HandSide::Right => &self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::LandmarkIndex;

    fn hand_at(wrist_x: i32) -> HandFrame {
        HandFrame::empty()
            .with(LandmarkIndex::Wrist, wrist_x, 400)
            .with(LandmarkIndex::ThumbTip, wrist_x + 30, 300)
    }

    #[test]
    fn smaller_wrist_x_is_left() {
        let pair = HandPair::assign(hand_at(500), hand_at(100));
        assert_eq!(pair.left.wrist().map(|w| w.x), Some(100));
        assert_eq!(pair.right.wrist().map(|w| w.x), Some(500));

        let pair = HandPair::assign(hand_at(100), hand_at(500));
        assert_eq!(pair.left.wrist().map(|w| w.x), Some(100));
    }

    #[test]
    fn lone_hand_is_left() {
        let pair = HandPair::assign(HandFrame::empty(), hand_at(500));
        assert_eq!(pair.left.wrist().map(|w| w.x), Some(500));
        assert!(pair.right.is_empty());

        let pair = HandPair::assign(hand_at(500), HandFrame::empty());
        assert_eq!(pair.left.wrist().map(|w| w.x), Some(500));
        assert!(pair.right.is_empty());
    }

    #[test]
    fn missing_wrist_keeps_detector_order() {
        let no_wrist = HandFrame::empty().with(LandmarkIndex::ThumbTip, 10, 10);
        let pair = HandPair::assign(hand_at(500), no_wrist.clone());
        assert_eq!(pair.left.wrist().map(|w| w.x), Some(500));
        assert_eq!(pair.right, no_wrist);
    }

    #[test]
    fn no_hands() {
        let pair = HandPair::assign(HandFrame::empty(), HandFrame::empty());
        assert!(pair.left.is_empty());
        assert!(pair.right.is_empty());
    }
}
