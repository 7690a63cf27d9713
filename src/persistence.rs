//! The persistence boundary.
//!
//! The core exchanges `(name, frames, width, height)` with a store and gets
//! back a [`DrawingId`]; loading by id returns the identical matrix of
//! color tokens. [`JsonFileStore`] is the bundled implementation, one JSON
//! document per drawing; anything else (a relational store, a remote
//! service) can plug in through the [`DrawingStore`] trait.

use crate::frame::{Frame, GridSize};
use crate::util::time;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur at the store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize drawing: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access drawing store: {0}")]
    Io(#[from] std::io::Error),

    #[error("drawing {0} not found")]
    NotFound(DrawingId),

    #[error("stored drawing is corrupt: {0}")]
    Corrupt(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Stable identity of a stored drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawingId(Uuid);

impl DrawingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DrawingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The stored shape of a drawing: name, declared dimensions, and the full
/// ordered frame sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDrawing {
    pub id: DrawingId,
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub frames: Vec<Frame>,
    /// Seconds since the UNIX epoch of the last save.
    pub updated_at: u64,
}

impl StoredDrawing {
    /// Validate the invariants a loaded drawing must satisfy: at least one
    /// frame, every frame rectangular at the declared dimensions.
    fn validate(&self) -> StoreResult<()> {
        if self.frames.is_empty() {
            return Err(StoreError::Corrupt(format!(
                "drawing {} has no frames",
                self.id
            )));
        }
        let size = GridSize::new(self.width, self.height);
        for (index, frame) in self.frames.iter().enumerate() {
            if !frame.matches(size) {
                return Err(StoreError::Corrupt(format!(
                    "frame {} of drawing {} does not match declared size {}x{}",
                    index, self.id, self.width, self.height
                )));
            }
        }
        Ok(())
    }
}

/// The external persistence collaborator interface.
pub trait DrawingStore {
    /// Create a new stored drawing and return its identity.
    fn save(&self, name: &str, frames: &[Frame], size: GridSize) -> StoreResult<DrawingId>;

    /// Overwrite an existing drawing in place.
    fn update(&self, id: DrawingId, name: &str, frames: &[Frame], size: GridSize)
        -> StoreResult<()>;

    /// Load a drawing by id.
    fn load(&self, id: DrawingId) -> StoreResult<StoredDrawing>;

    /// Delete a drawing. Returns `true` if it existed.
    fn delete(&self, id: DrawingId) -> StoreResult<bool>;

    /// All stored drawings, most recently updated first.
    fn list(&self) -> StoreResult<Vec<StoredDrawing>>;
}

/// A store writing one pretty-printed JSON document per drawing.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: DrawingId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    fn write(&self, drawing: &StoredDrawing) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(drawing)?;
        fs::write(self.path_for(drawing.id), json)?;
        Ok(())
    }

    fn read(&self, path: &Path) -> StoreResult<StoredDrawing> {
        let json = fs::read_to_string(path)?;
        let drawing: StoredDrawing = serde_json::from_str(&json)?;
        drawing.validate()?;
        Ok(drawing)
    }
}

impl DrawingStore for JsonFileStore {
    fn save(&self, name: &str, frames: &[Frame], size: GridSize) -> StoreResult<DrawingId> {
        let drawing = StoredDrawing {
            id: DrawingId::new(),
            name: name.to_string(),
            width: size.width,
            height: size.height,
            frames: frames.to_vec(),
            updated_at: time::timestamp_secs(),
        };
        self.write(&drawing)?;
        log::info!(
            "saved drawing {} ({:?}, {} frame(s))",
            drawing.id,
            name,
            drawing.frames.len()
        );
        Ok(drawing.id)
    }

    fn update(
        &self,
        id: DrawingId,
        name: &str,
        frames: &[Frame],
        size: GridSize,
    ) -> StoreResult<()> {
        if !self.path_for(id).exists() {
            return Err(StoreError::NotFound(id));
        }
        let drawing = StoredDrawing {
            id,
            name: name.to_string(),
            width: size.width,
            height: size.height,
            frames: frames.to_vec(),
            updated_at: time::timestamp_secs(),
        };
        self.write(&drawing)?;
        log::info!("updated drawing {id}");
        Ok(())
    }

    fn load(&self, id: DrawingId) -> StoreResult<StoredDrawing> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        self.read(&path)
    }

    fn delete(&self, id: DrawingId) -> StoreResult<bool> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        log::info!("deleted drawing {id}");
        Ok(true)
    }

    fn list(&self) -> StoreResult<Vec<StoredDrawing>> {
        let mut drawings = Vec::new();
        if !self.dir.exists() {
            return Ok(drawings);
        }

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                match self.read(&path) {
                    Ok(drawing) => drawings.push(drawing),
                    Err(err) => {
                        // A single bad file must not hide the rest.
                        log::warn!("skipping unreadable drawing {}: {err}", path.display());
                    }
                }
            }
        }

        drawings.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(drawings)
    }
}
