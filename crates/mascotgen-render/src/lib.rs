// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mascotgen-render — Turns one mascot image into the app's brand assets.
//
// Provides source loading and square resampling, alpha compositing onto fixed
// canvases, splash text rendering with a system-font/bitmap fallback, the
// three asset generators, and the pipeline that writes them to disk.

pub mod generate;
pub mod image;
pub mod pipeline;
pub mod text;

// Re-export the primary entry points so callers can use `mascotgen_render::generate_all` etc.
pub use self::image::source::MascotSource;
pub use pipeline::generate_all;
pub use text::TextFont;
