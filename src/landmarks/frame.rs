#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::index::{LandmarkIndex, LANDMARK_COUNT};

/// One tracked point in camera pixel space (origin top-left).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkPosition {
    pub index: LandmarkIndex,
    pub x: i32,
    pub y: i32,
}

impl LandmarkPosition {
    pub fn new(index: LandmarkIndex, x: i32, y: i32) -> Self {
        Self { index, x, y }
    }

    /// Euclidean distance in pixels.
    ///
    /// Differences are taken in `f64`, so any pair of `i32` coordinates is
    /// valid.
    #[inline]
    pub fn distance(&self, other: &LandmarkPosition) -> f32 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy) as f32
    }
}

/// Landmarks detected on one hand in one camera frame.
///
/// Points live in a table indexed by [`LandmarkIndex`], so lookups never
/// scan. A missing slot means the detector did not report that joint this
/// frame. An empty frame is an undetected hand.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<LandmarkPosition>", into = "Vec<LandmarkPosition>")
)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandFrame {
    points: [Option<LandmarkPosition>; LANDMARK_COUNT],
}

impl HandFrame {
    /// Frame with no detected landmarks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a frame from detector output.
    ///
    /// Fails if the same landmark appears twice.
    pub fn from_positions<I>(positions: I) -> Result<Self, FrameError>
    where
        I: IntoIterator<Item = LandmarkPosition>,
    {
        let mut frame = Self::empty();
        for position in positions {
            let slot = &mut frame.points[position.index.ordinal()];
            if slot.is_some() {
                return Err(FrameError::DuplicateLandmark(position.index));
            }
            *slot = Some(position);
        }
        Ok(frame)
    }

    /// Set a landmark, returning the previous position for that joint.
    pub fn insert(&mut self, position: LandmarkPosition) -> Option<LandmarkPosition> {
        self.points[position.index.ordinal()].replace(position)
    }

    /// Builder-style [`insert`](Self::insert) for fixtures and simulators.
    pub fn with(mut self, index: LandmarkIndex, x: i32, y: i32) -> Self {
        self.insert(LandmarkPosition::new(index, x, y));
        self
    }

    #[inline]
    pub fn get(&self, index: LandmarkIndex) -> Option<LandmarkPosition> {
        self.points[index.ordinal()]
    }

    pub fn wrist(&self) -> Option<LandmarkPosition> {
        self.get(LandmarkIndex::Wrist)
    }

    /// Present landmarks in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &LandmarkPosition> + Clone {
        self.points.iter().flatten()
    }

    /// Number of present landmarks.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Option::is_none)
    }

    /// Distance between two joints, 0.0 when either is missing.
    pub fn distance(&self, a: LandmarkIndex, b: LandmarkIndex) -> f32 {
        match (self.get(a), self.get(b)) {
            (Some(pa), Some(pb)) => pa.distance(&pb),
            _ => 0.0,
        }
    }
}

impl TryFrom<Vec<LandmarkPosition>> for HandFrame {
    type Error = FrameError;

    fn try_from(positions: Vec<LandmarkPosition>) -> Result<Self, Self::Error> {
        Self::from_positions(positions)
    }
}

impl From<HandFrame> for Vec<LandmarkPosition> {
    fn from(frame: HandFrame) -> Self {
        frame.iter().copied().collect()
    }
}

/// Errors that can occur when building a hand frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The detector reported the same joint twice for one hand
    DuplicateLandmark(LandmarkIndex),
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::DuplicateLandmark(index) => {
                write!(f, "Landmark {} appears more than once in one hand", index.as_str())
            }
        }
    }
}

impl std::error::Error for FrameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_index() {
        let frame = HandFrame::empty()
            .with(LandmarkIndex::ThumbTip, 10, 20)
            .with(LandmarkIndex::IndexFingerTip, 13, 24);

        assert_eq!(frame.len(), 2);
        assert_eq!(
            frame.get(LandmarkIndex::ThumbTip),
            Some(LandmarkPosition::new(LandmarkIndex::ThumbTip, 10, 20))
        );
        assert_eq!(frame.get(LandmarkIndex::Wrist), None);
    }

    #[test]
    fn distance_is_euclidean() {
        let frame = HandFrame::empty()
            .with(LandmarkIndex::ThumbTip, 10, 20)
            .with(LandmarkIndex::IndexFingerTip, 13, 24);

        let d = frame.distance(LandmarkIndex::ThumbTip, LandmarkIndex::IndexFingerTip);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn distance_across_full_coordinate_range() {
        let frame = HandFrame::empty()
            .with(LandmarkIndex::ThumbTip, i32::MIN, 0)
            .with(LandmarkIndex::IndexFingerTip, i32::MAX, 0);

        let d = frame.distance(LandmarkIndex::ThumbTip, LandmarkIndex::IndexFingerTip);
        assert!(d.is_finite());
        assert!((d - u32::MAX as f32).abs() <= 1.0);

        let corners = HandFrame::empty()
            .with(LandmarkIndex::ThumbTip, i32::MIN, i32::MIN)
            .with(LandmarkIndex::IndexFingerTip, i32::MAX, i32::MAX);
        let d = corners.distance(LandmarkIndex::ThumbTip, LandmarkIndex::IndexFingerTip);
        assert!(d.is_finite());
        assert!(d > u32::MAX as f32);
    }

    #[test]
    fn distance_with_missing_joint_is_zero() {
        let frame = HandFrame::empty().with(LandmarkIndex::ThumbTip, 10, 20);
        assert_eq!(
            frame.distance(LandmarkIndex::ThumbTip, LandmarkIndex::IndexFingerTip),
            0.0
        );
        assert_eq!(
            HandFrame::empty().distance(LandmarkIndex::ThumbTip, LandmarkIndex::IndexFingerTip),
            0.0
        );
    }

    #[test]
    fn duplicate_landmark_is_rejected() {
        let result = HandFrame::from_positions([
            LandmarkPosition::new(LandmarkIndex::Wrist, 0, 0),
            LandmarkPosition::new(LandmarkIndex::Wrist, 5, 5),
        ]);
        assert_eq!(result, Err(FrameError::DuplicateLandmark(LandmarkIndex::Wrist)));
    }

    #[test]
    fn insert_replaces_previous_position() {
        let mut frame = HandFrame::empty();
        assert_eq!(frame.insert(LandmarkPosition::new(LandmarkIndex::Wrist, 1, 1)), None);
        let previous = frame.insert(LandmarkPosition::new(LandmarkIndex::Wrist, 2, 2));
        assert_eq!(previous.map(|p| p.x), Some(1));
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn empty_frame() {
        let frame = HandFrame::empty();
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
        assert_eq!(frame.iter().count(), 0);
    }
}
