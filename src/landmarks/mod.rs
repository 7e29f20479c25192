// Purpose: typed hand landmarks for one camera frame
// Detector output (labelled 2D points) enters the crate here

pub mod frame;
pub mod hands;
pub mod index;

pub use frame::{FrameError, HandFrame, LandmarkPosition};
pub use hands::{HandPair, HandSide};
pub use index::{LandmarkIndex, UnknownLandmark, LANDMARK_COUNT};
