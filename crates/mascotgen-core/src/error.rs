// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for mascotgen.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all asset generation operations.
#[derive(Debug, Error)]
pub enum MascotGenError {
    // -- Source errors --
    #[error("mascot file not found at {}", path.display())]
    SourceNotFound { path: PathBuf },

    // -- Rendering errors --
    #[error("image processing failed: {0}")]
    Image(String),

    #[error("font could not be loaded: {0}")]
    Font(String),

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MascotGenError>;
