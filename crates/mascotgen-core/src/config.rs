// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generator configuration. Every value is a built-in brand constant; there is
// no configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Baby blue `#CDE9F9`, shared by the icon and splash backgrounds.
pub const BRAND_BACKGROUND: [u8; 3] = [205, 233, 249];

/// Everything the generator needs to produce the three brand assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Mascot artwork to load.
    pub source_path: PathBuf,
    /// Directory the PNG files are written to (created if absent).
    pub output_dir: PathBuf,
    /// Directory whose `*.png` files are listed when the mascot is missing.
    ///
    /// This does not match the parent of `source_path`.
    pub listing_dir: PathBuf,
    /// Opaque background colour for the icon and splash.
    pub background: [u8; 3],
    /// Square app icon.
    pub icon: IconLayout,
    /// Adaptive-icon foreground layer.
    pub adaptive: IconLayout,
    /// Full-screen splash.
    pub splash: SplashLayout,
    /// TrueType/OpenType fonts tried in order for the splash text.
    pub font_candidates: Vec<PathBuf>,
}

/// A square canvas with the mascot scaled to a fraction of its side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconLayout {
    /// Canvas side in pixels.
    pub size: u32,
    /// Mascot side as a fraction of `size`.
    pub mascot_ratio: f32,
}

/// Splash canvas geometry and the two text lines drawn under the mascot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplashLayout {
    pub width: u32,
    pub height: u32,
    /// Mascot side as a fraction of `width`.
    pub mascot_ratio: f32,
    /// Pixels the mascot is raised above the vertical centre.
    pub mascot_lift: i32,
    pub title: TextStyle,
    /// Gap between the mascot's bottom edge and the title's top edge.
    pub title_gap: i32,
    /// Drop shadow offset (both axes) for the title.
    pub shadow_offset: i32,
    /// Opaque shadow colour.
    pub shadow_color: [u8; 3],
    pub tagline: TextStyle,
    /// Distance from the title's top edge to the tagline's top edge.
    pub tagline_gap: i32,
}

/// One line of horizontally centred text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub text: String,
    /// Font size in pixels.
    pub size: f32,
    pub color: [u8; 3],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("src/assets/mascot/maskot.png"),
            output_dir: PathBuf::from("assets"),
            listing_dir: PathBuf::from("MASCOT"),
            background: BRAND_BACKGROUND,
            icon: IconLayout {
                size: 1024,
                mascot_ratio: 0.9,
            },
            adaptive: IconLayout {
                size: 1024,
                mascot_ratio: 0.8,
            },
            splash: SplashLayout::default(),
            font_candidates: default_font_candidates(),
        }
    }
}

impl Default for SplashLayout {
    fn default() -> Self {
        Self {
            width: 1284,
            height: 2778,
            mascot_ratio: 0.5,
            mascot_lift: 200,
            title: TextStyle {
                text: "Umai".to_string(),
                size: 120.0,
                color: [51, 51, 51],
            },
            title_gap: 50,
            shadow_offset: 4,
            shadow_color: [0, 0, 0],
            tagline: TextStyle {
                text: "Your AI Parenting Assistant".to_string(),
                size: 40.0,
                color: [102, 102, 102],
            },
            tagline_gap: 150,
        }
    }
}

impl GeneratorConfig {
    /// Resolve an output file name inside `output_dir`.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Helvetica on macOS first, then common Linux and Windows sans faces.
fn default_font_candidates() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}
