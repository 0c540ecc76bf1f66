// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One-shot generation pipeline: load the mascot, render each asset in turn,
// and write it to the output directory. Files are written one at a time, so a
// failure part-way leaves the earlier files in place.

use image::DynamicImage;
use mascotgen_core::config::GeneratorConfig;
use mascotgen_core::error::Result;
use mascotgen_core::types::{AssetKind, GeneratedAsset};
use tracing::{info, instrument};

use crate::generate::{render_adaptive_icon, render_icon, render_splash};
use crate::image::encode::save_png;
use crate::image::source::MascotSource;
use crate::text::TextFont;

/// Generate and save every asset described by `config`.
///
/// The output directory is created before the mascot is loaded. Returns the
/// written files in generation order.
#[instrument(skip_all, fields(source = %config.source_path.display(), output = %config.output_dir.display()))]
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<GeneratedAsset>> {
    std::fs::create_dir_all(&config.output_dir)?;

    let source = MascotSource::open(&config.source_path)?;
    let font = TextFont::load(&config.font_candidates);

    let mut written = Vec::with_capacity(AssetKind::ALL.len());
    for kind in AssetKind::ALL {
        let image = render_asset(kind, &source, config, &font);
        let path = config.output_path(kind.file_name());
        save_png(&image, &path)?;
        info!(asset = kind.label(), path = %path.display(), alpha = kind.has_alpha(), "Saved");
        written.push(GeneratedAsset {
            kind,
            path,
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(written)
}

/// Render a single asset in memory.
pub fn render_asset(
    kind: AssetKind,
    source: &MascotSource,
    config: &GeneratorConfig,
    font: &TextFont,
) -> DynamicImage {
    match kind {
        AssetKind::Icon => {
            DynamicImage::ImageRgb8(render_icon(source, &config.icon, config.background))
        }
        AssetKind::AdaptiveIcon => {
            DynamicImage::ImageRgba8(render_adaptive_icon(source, &config.adaptive))
        }
        AssetKind::Splash => DynamicImage::ImageRgb8(render_splash(
            source,
            &config.splash,
            config.background,
            font,
        )),
    }
}
