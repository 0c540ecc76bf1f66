// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptive-icon foreground: mascot centred on a fully transparent canvas. The
// platform supplies the background layer.

use image::RgbaImage;
use mascotgen_core::config::IconLayout;
use tracing::{info, instrument};

use crate::image::canvas::{centered_offset, paste_over, scaled_side, transparent_canvas};
use crate::image::source::MascotSource;

#[instrument(skip_all, fields(size = layout.size, ratio = layout.mascot_ratio))]
pub fn render_adaptive_icon(source: &MascotSource, layout: &IconLayout) -> RgbaImage {
    let side = scaled_side(layout.size, layout.mascot_ratio);
    let offset = centered_offset(layout.size, side);
    info!(side, offset, "Rendering adaptive icon foreground");

    let mascot = source.scaled_square(side);
    let mut canvas = transparent_canvas(layout.size, layout.size);
    paste_over(&mut canvas, &mascot, offset, offset);
    canvas
}
