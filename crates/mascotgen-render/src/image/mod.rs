// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — source loading, canvas compositing, and PNG encoding.

pub mod canvas;
pub mod encode;
pub mod source;

pub use source::MascotSource;
