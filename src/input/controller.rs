//! The gesture state machine.
//!
//! Translates a sequence of pointer events into at most one
//! [`CanvasCommand`] per gesture, distinguishing free-hand drawing from
//! two-click shape placement, drag-based shape preview, and single-shot
//! fill. All transient state (anchor, preview) lives here and is discarded
//! when a gesture completes or the tool changes; nothing in this module
//! touches the frame sequence.

use super::{CanvasCommand, PointerEvent};
use crate::frame::GridSize;
use crate::geometry::{self, Point};
use crate::tool::Tool;

/// Tunable thresholds for gesture recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Minimum pointer travel, in cells, before an anchored shape gesture
    /// becomes a live drag preview. Below the threshold the gesture is
    /// treated as awaiting a second discrete click.
    pub drag_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { drag_threshold: 2.0 }
    }
}

/// Where the controller is within a shape gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    /// A start point was recorded for a shape tool; a second input decides
    /// between click-to-click commit and drag preview.
    ShapeAnchored { start: Point },
    /// The pointer moved past the drag threshold; every move rebuilds the
    /// preview, release commits it.
    Dragging { start: Point },
}

/// The interactive canvas state machine.
#[derive(Debug)]
pub struct CanvasController {
    state: GestureState,
    preview: Vec<Point>,
    pointer_down: bool,
    config: GestureConfig,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            state: GestureState::Idle,
            preview: Vec::new(),
            pointer_down: false,
            config,
        }
    }

    /// The uncommitted point set of an in-progress drag, for the UI layer
    /// to render as an overlay. Never baked into a frame.
    pub fn preview_points(&self) -> &[Point] {
        &self.preview
    }

    /// The anchored start point of an in-progress shape gesture, if any.
    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            GestureState::ShapeAnchored { start } | GestureState::Dragging { start } => Some(start),
            GestureState::Idle => None,
        }
    }

    /// Drop any anchored start point and preview and return to idle.
    ///
    /// Called on tool change; a gesture cannot survive a tool switch.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.preview.clear();
        self.pointer_down = false;
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Returns the mutation to commit, if this event completed a gesture.
    /// No transition can fail: out-of-grid coordinates are filtered, and an
    /// event that means nothing for the current `(state, tool)` is ignored.
    pub fn handle_event(
        &mut self,
        tool: Tool,
        event: PointerEvent,
        size: GridSize,
    ) -> Option<CanvasCommand> {
        match tool {
            Tool::None => {
                // View-only: never leaves idle.
                self.reset();
                None
            }
            Tool::Pencil => self.handle_pencil(event, size),
            Tool::Fill => self.handle_fill(event, size),
            Tool::Line | Tool::Rectangle | Tool::Circle => self.handle_shape(tool, event, size),
        }
    }

    /// Pencil: each in-range down or move-while-down event is one atomic
    /// pixel write; there is no gesture state between writes.
    fn handle_pencil(&mut self, event: PointerEvent, size: GridSize) -> Option<CanvasCommand> {
        match event {
            PointerEvent::Down(p) => {
                self.pointer_down = true;
                size.contains(p).then_some(CanvasCommand::PaintPixel(p))
            }
            PointerEvent::Move(p) => (self.pointer_down && size.contains(p))
                .then_some(CanvasCommand::PaintPixel(p)),
            PointerEvent::Up(_) => {
                self.pointer_down = false;
                None
            }
        }
    }

    /// Fill: single-shot on pointer-down, no drag or anchor involvement.
    fn handle_fill(&mut self, event: PointerEvent, size: GridSize) -> Option<CanvasCommand> {
        match event {
            PointerEvent::Down(p) => {
                self.pointer_down = true;
                size.contains(p).then_some(CanvasCommand::Fill(p))
            }
            PointerEvent::Move(_) => None,
            PointerEvent::Up(_) => {
                self.pointer_down = false;
                None
            }
        }
    }

    fn handle_shape(
        &mut self,
        tool: Tool,
        event: PointerEvent,
        size: GridSize,
    ) -> Option<CanvasCommand> {
        match event {
            PointerEvent::Down(p) => {
                self.pointer_down = true;
                match self.state {
                    GestureState::Idle => {
                        self.state = GestureState::ShapeAnchored { start: p };
                        self.preview.clear();
                        None
                    }
                    // Second click commits the shape from anchor to here.
                    GestureState::ShapeAnchored { start } | GestureState::Dragging { start } => {
                        let points = rasterize(tool, start, p, size);
                        self.reset();
                        Some(CanvasCommand::PaintShape(points))
                    }
                }
            }
            PointerEvent::Move(p) => {
                if !self.pointer_down {
                    return None;
                }
                match self.state {
                    GestureState::Idle => None,
                    GestureState::ShapeAnchored { start } => {
                        if geometry::distance(start, p) >= self.config.drag_threshold {
                            self.state = GestureState::Dragging { start };
                            self.preview = rasterize(tool, start, p, size);
                        }
                        None
                    }
                    GestureState::Dragging { start } => {
                        self.preview = rasterize(tool, start, p, size);
                        None
                    }
                }
            }
            PointerEvent::Up(_) => {
                self.pointer_down = false;
                match self.state {
                    GestureState::Dragging { start } => {
                        if self.preview.is_empty() {
                            // The whole shape clipped away; the release still
                            // ends the drag, falling back to awaiting a click.
                            self.state = GestureState::ShapeAnchored { start };
                            None
                        } else {
                            let points = std::mem::take(&mut self.preview);
                            self.state = GestureState::Idle;
                            Some(CanvasCommand::PaintShape(points))
                        }
                    }
                    // Click-to-click: stay anchored, awaiting the second click.
                    _ => None,
                }
            }
        }
    }
}

/// Rasterize the active shape tool between two points and clip the result
/// to the grid.
fn rasterize(tool: Tool, start: Point, end: Point, size: GridSize) -> Vec<Point> {
    let points = match tool {
        Tool::Line => geometry::line_points(start, end),
        Tool::Rectangle => geometry::rectangle_points(start, end, false),
        Tool::Circle => {
            let radius = geometry::distance(start, end).round() as u32;
            geometry::circle_points(start, radius, false)
        }
        _ => Vec::new(),
    };

    points.into_iter().filter(|p| size.contains(*p)).collect()
}
