//! Whole-animation frame-set operations.
//!
//! These follow the same pure discipline as the mutators in [`crate::draw`]:
//! take the current frame sequence, return a new one.

use crate::frame::{Frame, GridSize};
use thiserror::Error;

/// Errors signaled by frame-set operations.
///
/// These represent UI-flow bugs and are never silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("an animation must keep at least one frame")]
    LastFrame,

    #[error("frame index {index} out of range for {len} frame(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a drawing must contain at least one frame")]
    EmptyAnimation,
}

/// A new animation: a single blank frame.
pub fn blank_animation(size: GridSize) -> Vec<Frame> {
    vec![Frame::blank(size)]
}

/// Append one blank frame. Existing frames are never touched or reordered.
pub fn add_frame(frames: &[Frame], size: GridSize) -> Vec<Frame> {
    let mut next = frames.to_vec();
    next.push(Frame::blank(size));
    next
}

/// Remove the frame at `index`.
///
/// Fails when the sequence would become empty or the index is invalid; on
/// failure nothing is mutated.
pub fn delete_frame(frames: &[Frame], index: usize) -> Result<Vec<Frame>, FrameError> {
    if frames.len() <= 1 {
        return Err(FrameError::LastFrame);
    }
    if index >= frames.len() {
        return Err(FrameError::IndexOutOfRange {
            index,
            len: frames.len(),
        });
    }

    let mut next = frames.to_vec();
    next.remove(index);
    Ok(next)
}

/// Move the frame at `from` to position `to`, preserving the relative order
/// of all other frames.
///
/// Equal or out-of-range indices are a no-op returning the input unchanged.
pub fn reorder_frames(frames: &[Frame], from: usize, to: usize) -> Vec<Frame> {
    let mut next = frames.to_vec();
    if from == to || from >= next.len() || to >= next.len() {
        return next;
    }

    let frame = next.remove(from);
    next.insert(to, frame);
    next
}

/// A deep, fully independent copy used as a change-detection baseline.
pub fn snapshot(frames: &[Frame]) -> Vec<Frame> {
    frames.to_vec()
}

/// Whether `current` differs structurally from the saved baseline.
///
/// An empty snapshot always reports changes: a fresh session with no
/// baseline is dirty until its first save.
pub fn has_changes(current: &[Frame], snapshot: &[Frame]) -> bool {
    if snapshot.is_empty() {
        return true;
    }
    current != snapshot
}
