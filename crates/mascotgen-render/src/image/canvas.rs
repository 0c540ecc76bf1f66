// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canvas helpers — sizing, centring, source-over pasting, and flattening an
// RGBA canvas onto an opaque background.

use image::imageops;
use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Side of the scaled mascot for a canvas extent and ratio, floored, never 0.
pub fn scaled_side(extent: u32, ratio: f32) -> u32 {
    let side = (f64::from(extent) * f64::from(ratio)).floor();
    (side.max(0.0) as u32).max(1)
}

/// Offset that centres `content` within `canvas`, flooring like integer
/// division. Negative when the content is larger than the canvas.
pub fn centered_offset(canvas: u32, content: u32) -> i64 {
    (i64::from(canvas) - i64::from(content)).div_euclid(2)
}

/// A fully opaque canvas filled with `color`.
pub fn solid_canvas(width: u32, height: u32, color: [u8; 3]) -> RgbaImage {
    let [r, g, b] = color;
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
}

/// A fully transparent canvas.
pub fn transparent_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

/// Alpha-composite `top` onto `canvas` with its top-left corner at (`x`, `y`).
///
/// This is true source-over: a partly transparent top pixel over a fully
/// transparent canvas keeps its colour and alpha. It differs from Pillow's
/// paste-with-own-mask, which lerps the alpha band too and so darkens and
/// thins anti-aliased edges. Anything outside the canvas is clipped.
pub fn paste_over(canvas: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(canvas, top, x, y);
}

/// Composite an RGBA canvas over an opaque background, dropping alpha.
pub fn flatten(canvas: &RgbaImage, background: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        blend_over(background, canvas.get_pixel(x, y).0)
    })
}

/// Colour of `overlay` (straight alpha) drawn over an opaque `background`.
fn blend_over(background: [u8; 3], overlay: [u8; 4]) -> Rgb<u8> {
    let alpha = u32::from(overlay[3]);
    let mix = |top: u8, bottom: u8| -> u8 {
        ((u32::from(top) * alpha + u32::from(bottom) * (255 - alpha) + 127) / 255) as u8
    };
    Rgb([
        mix(overlay[0], background[0]),
        mix(overlay[1], background[1]),
        mix(overlay[2], background[2]),
    ])
}
