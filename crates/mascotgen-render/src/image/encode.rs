// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PNG output for generated assets.

use std::path::Path;

use image::{DynamicImage, ImageFormat};
use mascotgen_core::error::{MascotGenError, Result};
use tracing::{debug, instrument};

/// Write `image` as PNG, overwriting any existing file. The format is always
/// PNG regardless of the path's extension.
#[instrument(skip(image), fields(path = %path.display(), width = image.width(), height = image.height()))]
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| {
            MascotGenError::Image(format!(
                "failed to save image to {}: {}",
                path.display(),
                err
            ))
        })?;
    debug!("PNG written");
    Ok(())
}
