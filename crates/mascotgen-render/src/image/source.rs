// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Mascot source image — decoded once to RGBA and resampled on demand for each
// asset. Uses the `image` crate's Lanczos3 filter.

use std::io::ErrorKind;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageError, RgbaImage};
use mascotgen_core::error::{MascotGenError, Result};
use tracing::{debug, info, instrument};

/// The decoded mascot artwork, read-only after load.
///
/// ```ignore
/// let source = MascotSource::open("src/assets/mascot/maskot.png")?;
/// let icon_art = source.scaled_square(921);
/// ```
pub struct MascotSource {
    image: RgbaImage,
}

impl MascotSource {
    // -- Construction ---------------------------------------------------------

    /// Load and decode the mascot from a file path.
    ///
    /// A missing file is reported as [`MascotGenError::SourceNotFound`] so the
    /// caller can take the dedicated reporting path; every other failure is a
    /// generic image error.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|err| match err {
            ImageError::IoError(io) if io.kind() == ErrorKind::NotFound => {
                MascotGenError::SourceNotFound {
                    path: path.to_path_buf(),
                }
            }
            other => {
                MascotGenError::Image(format!("failed to open {}: {}", path.display(), other))
            }
        })?;
        info!(
            width = decoded.width(),
            height = decoded.height(),
            "Loaded mascot"
        );
        Ok(Self::from_dynamic(decoded))
    }

    /// Wrap an already-decoded image, converting it to RGBA8.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgba8(),
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    // -- Resampling -----------------------------------------------------------

    /// Resample to exactly `side` x `side` pixels with Lanczos3.
    ///
    /// Non-square artwork is stretched to fill the square.
    #[instrument(skip(self))]
    pub fn scaled_square(&self, side: u32) -> RgbaImage {
        let side = side.max(1);
        debug!(
            from_w = self.width(),
            from_h = self.height(),
            side,
            "Resampling mascot"
        );
        imageops::resize(&self.image, side, side, FilterType::Lanczos3)
    }
}
