// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Splash text rendering. Outline fonts are loaded from the system with
// `ab_glyph` and drawn through `imageproc`; when no candidate parses, text
// falls back to the built-in `font8x8` bitmap glyphs scaled by whole pixels.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use mascotgen_core::error::{MascotGenError, Result};
use tracing::{debug, info, instrument, warn};

/// Native cell size of the bitmap glyphs.
const BITMAP_CELL: u32 = 8;

/// A font usable for drawing a line of text at any pixel size.
pub enum TextFont {
    /// A TrueType/OpenType face loaded from disk (face 0 of a collection).
    Outline { font: FontVec, path: PathBuf },
    /// The built-in 8x8 bitmap font.
    Bitmap,
}

impl std::fmt::Debug for TextFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline { path, .. } => f.debug_tuple("Outline").field(path).finish(),
            Self::Bitmap => f.write_str("Bitmap"),
        }
    }
}

impl TextFont {
    /// Use the first candidate that loads, or the bitmap font if none does.
    /// Never fails.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub fn load(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match Self::from_file(path) {
                Ok(font) => {
                    info!(path = %path.display(), "Loaded splash font");
                    return font;
                }
                Err(err) => debug!(path = %path.display(), error = %err, "Font candidate skipped"),
            }
        }
        warn!("No system font available, using built-in bitmap font");
        Self::Bitmap
    }

    /// Load an outline font from a `.ttf`, `.otf`, or `.ttc` file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|err| MascotGenError::Font(format!("{}: {}", path.display(), err)))?;
        let font = FontVec::try_from_vec_and_index(data, 0)
            .map_err(|err| MascotGenError::Font(format!("{}: {}", path.display(), err)))?;
        Ok(Self::Outline {
            font,
            path: path.to_path_buf(),
        })
    }

    /// Width and height in pixels of `text` drawn at `size`.
    pub fn measure(&self, size: f32, text: &str) -> (u32, u32) {
        match self {
            Self::Outline { font, .. } => text_size(PxScale::from(size), font, text),
            Self::Bitmap => {
                let cell = BITMAP_CELL * bitmap_scale(size);
                (cell * text.chars().count() as u32, cell)
            }
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`). Pixels outside the
    /// canvas are clipped.
    pub fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, size: f32, text: &str) {
        match self {
            Self::Outline { font, .. } => {
                draw_text_mut(canvas, color, x, y, PxScale::from(size), font, text);
            }
            Self::Bitmap => draw_bitmap_text(canvas, color, x, y, bitmap_scale(size), text),
        }
    }
}

/// Whole-pixel magnification that brings an 8px glyph closest to `size`.
fn bitmap_scale(size: f32) -> u32 {
    ((size / BITMAP_CELL as f32).round() as u32).max(1)
}

fn draw_bitmap_text(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, scale: u32, text: &str) {
    let advance = (BITMAP_CELL * scale) as i32;
    for (index, ch) in text.chars().enumerate() {
        // Unknown characters render as '?'.
        let glyph = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let origin_x = x + index as i32 * advance;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..BITMAP_CELL {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = origin_x + (col * scale) as i32;
                let py = y + (row as u32 * scale) as i32;
                draw_filled_rect_mut(canvas, Rect::at(px, py).of_size(scale, scale), color);
            }
        }
    }
}
