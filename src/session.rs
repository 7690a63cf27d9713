//! The editing session: single owner of the frame sequence.
//!
//! All mutation flows through [`handle_pointer`](EditorSession::handle_pointer):
//! the controller turns pointer events into commands, and the session
//! executes each command through the pure mutators, replacing its frame
//! sequence with the returned value. Tool, symmetry, and active color are
//! explicit session fields threaded into every call — there is no ambient
//! drawing state.

use crate::animation::{self, FrameError};
use crate::color::Color;
use crate::draw::{self, SymmetryMode};
use crate::frame::{Frame, GridSize};
use crate::geometry::{self, Point};
use crate::input::{CanvasCommand, CanvasController, PointerEvent};
use crate::persistence::StoredDrawing;
use crate::tool::Tool;

pub struct EditorSession {
    frames: Vec<Frame>,
    current_frame: usize,
    size: GridSize,
    tool: Tool,
    symmetry: SymmetryMode,
    active_color: Color,
    controller: CanvasController,
    /// Baseline for dirty tracking; empty until the first save.
    saved_snapshot: Vec<Frame>,
}

impl EditorSession {
    /// Start a session on a new blank drawing.
    pub fn new(size: GridSize) -> Self {
        Self::with_frames(animation::blank_animation(size), size)
    }

    /// Resume a session from a loaded drawing.
    ///
    /// The store validates its documents, but `StoredDrawing` can also be
    /// built by hand; a drawing without frames is rejected here rather than
    /// panicking later.
    pub fn from_stored(drawing: &StoredDrawing) -> Result<Self, FrameError> {
        if drawing.frames.is_empty() {
            return Err(FrameError::EmptyAnimation);
        }
        let size = GridSize::new(drawing.width, drawing.height);
        let mut session = Self::with_frames(drawing.frames.clone(), size);
        // What was just loaded is the saved state.
        session.mark_saved();
        Ok(session)
    }

    fn with_frames(frames: Vec<Frame>, size: GridSize) -> Self {
        debug_assert!(!frames.is_empty());
        Self {
            frames,
            current_frame: 0,
            size,
            tool: Tool::default(),
            symmetry: SymmetryMode::default(),
            active_color: Color::black(),
            controller: CanvasController::new(),
            saved_snapshot: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_frame]
    }

    pub fn grid_size(&self) -> GridSize {
        self.size
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn symmetry(&self) -> SymmetryMode {
        self.symmetry
    }

    pub fn active_color(&self) -> &Color {
        &self.active_color
    }

    /// The in-progress drag preview, rendered by the UI as an overlay.
    pub fn preview_points(&self) -> &[Point] {
        self.controller.preview_points()
    }

    /// Select a tool, discarding any in-progress gesture.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("tool changed: {:?} -> {:?}", self.tool, tool);
            self.controller.reset();
        }
        self.tool = tool;
    }

    pub fn set_symmetry(&mut self, symmetry: SymmetryMode) {
        self.symmetry = symmetry;
    }

    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    /// Switch the frame being edited. Out-of-range indices are ignored.
    pub fn select_frame(&mut self, index: usize) {
        if index < self.frames.len() {
            self.current_frame = index;
            self.controller.reset();
        } else {
            log::warn!(
                "ignoring frame selection {} (have {} frames)",
                index,
                self.frames.len()
            );
        }
    }

    /// Append a blank frame and select it.
    pub fn add_frame(&mut self) {
        self.frames = animation::add_frame(&self.frames, self.size);
        self.current_frame = self.frames.len() - 1;
        self.controller.reset();
    }

    /// Delete the frame at `index`; the last remaining frame cannot be
    /// deleted.
    pub fn delete_frame(&mut self, index: usize) -> Result<(), FrameError> {
        self.frames = animation::delete_frame(&self.frames, index)?;
        if self.current_frame >= self.frames.len() {
            self.current_frame = self.frames.len() - 1;
        }
        self.controller.reset();
        Ok(())
    }

    /// Move a frame to a new position, keeping the selection on the frame
    /// that was selected before the move.
    pub fn reorder_frames(&mut self, from: usize, to: usize) {
        let len = self.frames.len();
        if from == to || from >= len || to >= len {
            return;
        }
        self.frames = animation::reorder_frames(&self.frames, from, to);

        // Follow the selected frame to its new index.
        self.current_frame = if self.current_frame == from {
            to
        } else if from < self.current_frame && to >= self.current_frame {
            self.current_frame - 1
        } else if from > self.current_frame && to <= self.current_frame {
            self.current_frame + 1
        } else {
            self.current_frame
        };
        self.controller.reset();
    }

    /// Feed one pointer event through the gesture state machine and apply
    /// the resulting mutation, if any.
    ///
    /// Returns `true` when the frame sequence changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let command = self.controller.handle_event(self.tool, event, self.size);
        match command {
            Some(command) => self.execute(command),
            None => false,
        }
    }

    fn execute(&mut self, command: CanvasCommand) -> bool {
        match command {
            CanvasCommand::PaintPixel(p) => {
                self.frames = draw::set_pixel(
                    &self.frames,
                    self.current_frame,
                    p,
                    &self.active_color,
                    self.size,
                    self.symmetry,
                );
                true
            }
            CanvasCommand::PaintShape(points) => {
                if points.is_empty() {
                    return false;
                }
                log::debug!("committing shape of {} point(s)", points.len());
                self.frames = draw::apply_shape(
                    &self.frames,
                    self.current_frame,
                    &points,
                    &self.active_color,
                    self.size,
                    self.symmetry,
                );
                true
            }
            CanvasCommand::Fill(seed) => self.fill(seed),
        }
    }

    /// Flood-fill from `seed` with the active color.
    ///
    /// The filled region is applied without symmetry: filling one region
    /// never mirrors into the symmetric region.
    fn fill(&mut self, seed: Point) -> bool {
        let Some(target) = self.current_frame().get(seed).cloned() else {
            return false;
        };
        if target == self.active_color {
            return false;
        }

        let region =
            geometry::flood_fill(self.current_frame(), seed, &target, &self.active_color);
        if region.is_empty() {
            return false;
        }

        self.frames = draw::apply_shape(
            &self.frames,
            self.current_frame,
            &region,
            &self.active_color,
            self.size,
            SymmetryMode::None,
        );
        true
    }

    /// Whether the drawing differs from the last saved baseline.
    pub fn is_dirty(&self) -> bool {
        animation::has_changes(&self.frames, &self.saved_snapshot)
    }

    /// Re-baseline dirty tracking after a successful save.
    pub fn mark_saved(&mut self) {
        self.saved_snapshot = animation::snapshot(&self.frames);
    }
}
