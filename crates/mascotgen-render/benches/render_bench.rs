// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for asset rendering in the mascotgen-render crate.
// Covers the app icon (one Lanczos resample plus flatten) on a synthetic
// mascot of typical artwork size.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgba, RgbaImage};

use mascotgen_core::config::{BRAND_BACKGROUND, IconLayout};
use mascotgen_render::MascotSource;
use mascotgen_render::generate::render_icon;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark rendering the 1024x1024 icon from a 512x512 mascot: an opaque
/// disc on a transparent background, so both the blend and the copy paths of
/// the compositor are exercised.
fn bench_render_icon(c: &mut Criterion) {
    let art = RgbaImage::from_fn(512, 512, |x, y| {
        let (dx, dy) = (x as i32 - 256, y as i32 - 256);
        if dx * dx + dy * dy < 200 * 200 {
            Rgba([240, 140, 60, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let source = MascotSource::from_dynamic(DynamicImage::ImageRgba8(art));
    let layout = IconLayout {
        size: 1024,
        mascot_ratio: 0.9,
    };

    c.bench_function("render_icon (512 -> 1024)", |b| {
        b.iter(|| {
            let icon = render_icon(black_box(&source), &layout, BRAND_BACKGROUND);
            black_box(icon);
        });
    });
}

criterion_group!(benches, bench_render_icon);
criterion_main!(benches);
