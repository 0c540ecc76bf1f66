// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Square app icon: mascot centred on the brand background, saved opaque.

use image::RgbImage;
use mascotgen_core::config::IconLayout;
use tracing::{info, instrument};

use crate::image::canvas::{centered_offset, flatten, paste_over, scaled_side, solid_canvas};
use crate::image::source::MascotSource;

/// Render the opaque app icon.
#[instrument(skip_all, fields(size = layout.size, ratio = layout.mascot_ratio))]
pub fn render_icon(source: &MascotSource, layout: &IconLayout, background: [u8; 3]) -> RgbImage {
    let side = scaled_side(layout.size, layout.mascot_ratio);
    let offset = centered_offset(layout.size, side);
    info!(side, offset, "Rendering app icon");

    let mascot = source.scaled_square(side);
    let mut canvas = solid_canvas(layout.size, layout.size, background);
    paste_over(&mut canvas, &mascot, offset, offset);

    flatten(&canvas, background)
}
