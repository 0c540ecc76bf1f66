// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Asset generators — one per output file. Each is a pure function of the
// mascot and its layout; writing to disk is left to the pipeline.

pub mod adaptive;
pub mod icon;
pub mod splash;

pub use adaptive::render_adaptive_icon;
pub use icon::render_icon;
pub use splash::render_splash;
