#![warn(clippy::all, rust_2018_idioms)]

pub mod animation;
pub mod color;
pub mod draw;
pub mod export;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod persistence;
pub mod session;
pub mod tool;
pub mod util;

pub use animation::FrameError;
pub use color::Color;
pub use draw::SymmetryMode;
pub use frame::{Frame, GridSize};
pub use geometry::Point;
pub use input::{CanvasCommand, CanvasController, GestureConfig, PointerEvent};
pub use palette::Palette;
pub use persistence::{DrawingId, DrawingStore, JsonFileStore, StoreError, StoredDrawing};
pub use session::EditorSession;
pub use tool::Tool;
