//! Control pipeline benchmarks.

mod gesture;
mod tick;

pub use gesture::bench_extract;
pub use tick::bench_tick;

use handsynth::{HandFrame, LandmarkIndex};

/// A fully tracked hand: all 21 landmarks, fingers fanned out.
pub fn full_hand(wrist_x: i32) -> HandFrame {
    LandmarkIndex::ALL
        .iter()
        .fold(HandFrame::empty(), |frame, &index| {
            let i = index.ordinal() as i32;
            let finger = (i - 1) / 4;
            let joint = (i - 1) % 4;
            if index == LandmarkIndex::Wrist {
                frame.with(index, wrist_x, 400)
            } else {
                frame.with(index, wrist_x - 80 + finger * 40, 330 - joint * 40)
            }
        })
}
