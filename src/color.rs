use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque color token, e.g. `#FF00AA`.
///
/// The core never interprets the token except at the export boundary;
/// equality of tokens is equality of colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

/// Token used for blank cells.
pub const WHITE: &str = "#FFFFFF";

/// Token used as the default drawing color.
pub const BLACK: &str = "#000000";

impl Color {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The blank-cell color every new frame is filled with.
    pub fn white() -> Self {
        Self::new(WHITE)
    }

    pub fn black() -> Self {
        Self::new(BLACK)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
