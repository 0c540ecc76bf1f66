// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the mascot asset generator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The three assets produced from a single mascot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Opaque square app icon.
    Icon,
    /// Transparent foreground layer for platform adaptive icons.
    AdaptiveIcon,
    /// Full-screen startup image with the brand name and tagline.
    Splash,
}

impl AssetKind {
    /// All kinds, in generation order.
    pub const ALL: [AssetKind; 3] = [Self::Icon, Self::AdaptiveIcon, Self::Splash];

    /// File name written inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Icon => "icon.png",
            Self::AdaptiveIcon => "adaptive-icon.png",
            Self::Splash => "splash.png",
        }
    }

    /// Human-readable label for log output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Icon => "app icon",
            Self::AdaptiveIcon => "adaptive icon",
            Self::Splash => "splash screen",
        }
    }

    /// Whether the written PNG carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::AdaptiveIcon)
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A file the pipeline wrote to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for GeneratedAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.path.display(), self.width, self.height)
    }
}
