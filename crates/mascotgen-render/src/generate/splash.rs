// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Splash screen — mascot raised above centre on the brand background, with the
// app name (drop-shadowed) and tagline centred underneath.

use image::{Rgb, RgbImage};
use mascotgen_core::config::{SplashLayout, TextStyle};
use tracing::{debug, info, instrument};

use crate::image::canvas::{centered_offset, flatten, paste_over, scaled_side, solid_canvas};
use crate::image::source::MascotSource;
use crate::text::TextFont;

/// Where the mascot and the two text lines land on the splash canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashPlacement {
    pub mascot_side: u32,
    pub mascot_x: i64,
    pub mascot_y: i64,
    /// Top edge of the title line.
    pub title_y: i64,
    /// Top edge of the tagline.
    pub tagline_y: i64,
}

impl SplashPlacement {
    pub fn for_layout(layout: &SplashLayout) -> Self {
        let mascot_side = scaled_side(layout.width, layout.mascot_ratio);
        let mascot_x = centered_offset(layout.width, mascot_side);
        let mascot_y =
            centered_offset(layout.height, mascot_side) - i64::from(layout.mascot_lift);
        let title_y = mascot_y + i64::from(mascot_side) + i64::from(layout.title_gap);
        let tagline_y = title_y + i64::from(layout.tagline_gap);
        Self {
            mascot_side,
            mascot_x,
            mascot_y,
            title_y,
            tagline_y,
        }
    }
}

/// Render the opaque splash screen.
#[instrument(skip_all, fields(width = layout.width, height = layout.height, font = ?font))]
pub fn render_splash(
    source: &MascotSource,
    layout: &SplashLayout,
    background: [u8; 3],
    font: &TextFont,
) -> RgbImage {
    let place = SplashPlacement::for_layout(layout);
    info!(
        side = place.mascot_side,
        x = place.mascot_x,
        y = place.mascot_y,
        "Rendering splash screen"
    );

    let mascot = source.scaled_square(place.mascot_side);
    let mut canvas = solid_canvas(layout.width, layout.height, background);
    paste_over(&mut canvas, &mascot, place.mascot_x, place.mascot_y);
    let mut splash = flatten(&canvas, background);

    let shadow = Rgb(layout.shadow_color);
    let title_x = centered_line_x(font, layout.width, &layout.title);
    let offset = i64::from(layout.shadow_offset);
    draw_line(&mut splash, font, &layout.title, shadow, title_x + offset, place.title_y + offset);
    draw_line(
        &mut splash,
        font,
        &layout.title,
        Rgb(layout.title.color),
        title_x,
        place.title_y,
    );

    let tagline_x = centered_line_x(font, layout.width, &layout.tagline);
    draw_line(
        &mut splash,
        font,
        &layout.tagline,
        Rgb(layout.tagline.color),
        tagline_x,
        place.tagline_y,
    );

    splash
}

fn centered_line_x(font: &TextFont, canvas_width: u32, style: &TextStyle) -> i64 {
    let (text_width, _) = font.measure(style.size, &style.text);
    centered_offset(canvas_width, text_width)
}

fn draw_line(canvas: &mut RgbImage, font: &TextFont, style: &TextStyle, color: Rgb<u8>, x: i64, y: i64) {
    debug!(text = %style.text, x, y, "Drawing text");
    font.draw(canvas, color, clamp_i32(x), clamp_i32(y), style.size, &style.text);
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    const BG: [u8; 3] = [205, 233, 249];

    fn green_source() -> MascotSource {
        MascotSource::from_dynamic(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            64,
            64,
            Rgba([0, 200, 0, 255]),
        )))
    }

    #[test]
    fn default_placement_matches_brand_layout() {
        let place = SplashPlacement::for_layout(&SplashLayout::default());
        assert_eq!(
            place,
            SplashPlacement {
                mascot_side: 642,
                mascot_x: 321,
                mascot_y: 868,
                title_y: 1560,
                tagline_y: 1710,
            }
        );
    }

    #[test]
    fn splash_is_opaque_with_fixed_dimensions() {
        let splash = render_splash(&green_source(), &SplashLayout::default(), BG, &TextFont::Bitmap);
        assert_eq!(splash.dimensions(), (1284, 2778));
        assert_eq!(*splash.get_pixel(0, 0), Rgb(BG));
        assert_eq!(*splash.get_pixel(1283, 2777), Rgb(BG));
    }

    #[test]
    fn mascot_spans_half_the_width_above_centre() {
        let splash = render_splash(&green_source(), &SplashLayout::default(), BG, &TextFont::Bitmap);

        let is_green = |p: &Rgb<u8>| p.0[1] > 150 && p.0[0] < 40;
        assert_eq!(*splash.get_pixel(320, 1000), Rgb(BG));
        assert!(is_green(splash.get_pixel(321, 1000)));
        assert!(is_green(splash.get_pixel(962, 1000)));
        assert_eq!(*splash.get_pixel(963, 1000), Rgb(BG));
        assert_eq!(*splash.get_pixel(642, 867), Rgb(BG));
        assert!(is_green(splash.get_pixel(642, 868)));
    }

    #[test]
    fn title_and_shadow_are_drawn_below_mascot() {
        let layout = SplashLayout::default();
        let splash = render_splash(&green_source(), &layout, BG, &TextFont::Bitmap);

        let title_color = Rgb(layout.title.color);
        let shadow_color = Rgb([0, 0, 0]);
        let band = 1560..1560 + 124;
        let mut saw_title = false;
        let mut saw_shadow = false;
        for y in band {
            for x in 0..1284 {
                let p = *splash.get_pixel(x, y);
                saw_title |= p == title_color;
                saw_shadow |= p == shadow_color;
            }
        }
        assert!(saw_title);
        assert!(saw_shadow);
    }

    #[test]
    fn tagline_is_drawn_in_its_own_colour() {
        let layout = SplashLayout::default();
        let splash = render_splash(&green_source(), &layout, BG, &TextFont::Bitmap);

        let tagline_color = Rgb(layout.tagline.color);
        let found = (1710..1750).any(|y| (0..1284).any(|x| *splash.get_pixel(x, y) == tagline_color));
        assert!(found);
    }

    #[test]
    fn text_is_horizontally_centred() {
        let layout = SplashLayout::default();
        let x = centered_line_x(&TextFont::Bitmap, layout.width, &layout.title);
        // "Umai" in the bitmap font at 120px is 480px wide.
        assert_eq!(x, (1284 - 480) / 2);
    }
}
