use serde::{Deserialize, Serialize};

/// The active drawing tool, selected externally and read by the controller
/// on every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// View-only mode: all pointer events are ignored.
    None,
    #[default]
    Pencil,
    Line,
    Rectangle,
    Circle,
    Fill,
}

impl Tool {
    /// Whether this tool places a two-point shape (anchor, then commit).
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Line | Self::Rectangle | Self::Circle)
    }
}
