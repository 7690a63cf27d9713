//! Export of drawings and animations.
//!
//! Two output shapes: a self-describing JSON document carrying the raw
//! pixel tokens, and PNG rendering (single frame or a horizontal sprite
//! sheet) at an integer scale. PNG rendering is the one place the core
//! interprets color tokens, as `#RRGGBB` or `#RRGGBBAA`.

use crate::color::Color;
use crate::frame::Frame;
use crate::util::time;
use image::{Rgba, RgbaImage};
use serde::Serialize;
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid color token {0:?}")]
    InvalidColor(String),

    #[error("cannot export an empty animation")]
    EmptyAnimation,

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to serialize export data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Rendering options shared by all export shapes.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output pixels per grid cell.
    pub scale: u32,
    /// Color painted behind the cells; `None` leaves the canvas
    /// transparent, which only shows through `#RRGGBBAA` tokens with alpha.
    pub background: Option<Color>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 10,
            background: None,
        }
    }
}

/// JSON document for a single drawing.
#[derive(Debug, Serialize)]
pub struct DrawingExport<'a> {
    pub width: usize,
    pub height: usize,
    pub scale: u32,
    pub background: Option<&'a Color>,
    pub pixels: &'a [Vec<Color>],
    pub timestamp: u64,
}

/// JSON document for a whole animation.
#[derive(Debug, Serialize)]
pub struct AnimationExport<'a> {
    pub kind: &'static str,
    pub frame_count: usize,
    pub width: usize,
    pub height: usize,
    pub scale: u32,
    pub background: Option<&'a Color>,
    pub frames: Vec<FrameExport<'a>>,
    pub timestamp: u64,
}

#[derive(Debug, Serialize)]
pub struct FrameExport<'a> {
    pub index: usize,
    pub pixels: &'a [Vec<Color>],
}

/// Serialize one frame's pixel data with its dimensions and options.
pub fn drawing_json(frame: &Frame, options: &ExportOptions) -> ExportResult<String> {
    let export = DrawingExport {
        width: frame.width(),
        height: frame.height(),
        scale: options.scale,
        background: options.background.as_ref(),
        pixels: frame.rows(),
        timestamp: time::timestamp_secs(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Serialize the full frame sequence of an animation.
pub fn animation_json(frames: &[Frame], options: &ExportOptions) -> ExportResult<String> {
    let first = frames.first().ok_or(ExportError::EmptyAnimation)?;
    let export = AnimationExport {
        kind: "animation",
        frame_count: frames.len(),
        width: first.width(),
        height: first.height(),
        scale: options.scale,
        background: options.background.as_ref(),
        frames: frames
            .iter()
            .enumerate()
            .map(|(index, frame)| FrameExport {
                index,
                pixels: frame.rows(),
            })
            .collect(),
        timestamp: time::timestamp_secs(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Render one frame to an RGBA image at `options.scale` pixels per cell.
pub fn render_frame(frame: &Frame, options: &ExportOptions) -> ExportResult<RgbaImage> {
    let scale = options.scale.max(1);
    let width = frame.width() as u32 * scale;
    let height = frame.height() as u32 * scale;

    let background = match &options.background {
        Some(color) => parse_color(color)?,
        None => Rgba([0, 0, 0, 0]),
    };
    let mut img = RgbaImage::from_pixel(width, height, background);

    for (y, row) in frame.rows().iter().enumerate() {
        for (x, color) in row.iter().enumerate() {
            let pixel = parse_color(color)?;
            if pixel[3] == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x as u32 * scale + dx, y as u32 * scale + dy, pixel);
                }
            }
        }
    }

    Ok(img)
}

/// Render all frames side by side as one horizontal sprite sheet.
pub fn render_sheet(frames: &[Frame], options: &ExportOptions) -> ExportResult<RgbaImage> {
    let first = frames.first().ok_or(ExportError::EmptyAnimation)?;
    let scale = options.scale.max(1);
    let cell_width = first.width() as u32 * scale;
    let height = first.height() as u32 * scale;

    let mut sheet = RgbaImage::new(cell_width * frames.len() as u32, height);
    for (index, frame) in frames.iter().enumerate() {
        let rendered = render_frame(frame, options)?;
        image::imageops::overlay(&mut sheet, &rendered, i64::from(cell_width) * index as i64, 0);
    }

    Ok(sheet)
}

/// Render one frame and encode it as PNG bytes.
pub fn encode_png(frame: &Frame, options: &ExportOptions) -> ExportResult<Vec<u8>> {
    let img = render_frame(frame, options)?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    log::debug!("encoded {}x{} PNG, {} bytes", img.width(), img.height(), bytes.len());
    Ok(bytes)
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` token.
fn parse_color(color: &Color) -> ExportResult<Rgba<u8>> {
    let token = color.as_str();
    let invalid = || ExportError::InvalidColor(token.to_string());

    let hex = token.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 && hex.len() != 8 {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(invalid)
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    let a = if hex.len() == 8 { channel(6..8)? } else { 0xFF };

    Ok(Rgba([r, g, b, a]))
}
