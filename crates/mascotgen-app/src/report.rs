// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Console reporting for a generation run.

use std::error::Error as _;
use std::path::Path;

use mascotgen_core::error::{MascotGenError, Result};
use mascotgen_core::{GeneratedAsset, GeneratorConfig};
use tracing::{error, info, warn};

/// Log the result of a run. Failures are reported, never propagated.
pub fn report_outcome(config: &GeneratorConfig, outcome: Result<Vec<GeneratedAsset>>) {
    match outcome {
        Ok(assets) => {
            info!(count = assets.len(), "All icons generated successfully");
            for asset in &assets {
                info!(kind = asset.kind.label(), "  - {}", asset);
            }
        }
        Err(MascotGenError::SourceNotFound { path }) => {
            error!(path = %path.display(), "Mascot file not found");
            // Lists `listing_dir`, not the directory the mascot was expected in.
            match list_png_files(&config.listing_dir) {
                Ok(files) => {
                    info!(dir = %config.listing_dir.display(), "Available mascot files:");
                    for file in files {
                        info!("  - {}", file);
                    }
                }
                Err(err) => warn!(
                    dir = %config.listing_dir.display(),
                    error = %err,
                    "Could not list available mascot files"
                ),
            }
        }
        Err(err) => {
            error!(error = %err, "Asset generation failed");
            for (depth, cause) in error_chain(&err).into_iter().enumerate() {
                error!(depth, "caused by: {}", cause);
            }
        }
    }
}

/// Names of the `*.png` entries directly inside `dir`, sorted.
pub fn list_png_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.ends_with(".png") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Messages of every underlying cause of `err`, outermost first.
fn error_chain(err: &MascotGenError) -> Vec<String> {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn list_png_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.png", "notes.txt", "c.PNG"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let files = list_png_files(dir.path()).unwrap();
        assert_eq!(files, vec!["a.png".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn list_png_files_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_png_files(&dir.path().join("MASCOT")).is_err());
    }

    #[test]
    fn error_chain_includes_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let err = MascotGenError::from(io);
        assert_eq!(error_chain(&err), vec!["read-only volume".to_string()]);
    }

    #[test]
    fn report_outcome_handles_every_path_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            listing_dir: dir.path().join("MASCOT"),
            ..GeneratorConfig::default()
        };

        report_outcome(
            &config,
            Err(MascotGenError::SourceNotFound {
                path: PathBuf::from("src/assets/mascot/maskot.png"),
            }),
        );
        report_outcome(&config, Err(MascotGenError::Image("bad".into())));
        report_outcome(&config, Ok(Vec::new()));
    }
}
