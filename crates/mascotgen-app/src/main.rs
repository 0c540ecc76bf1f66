// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mascotgen — Brand asset generator
//
// Entry point. Initialises logging, runs the generation pipeline with the
// built-in configuration, and reports the outcome. Always exits 0.

mod report;

use mascotgen_core::GeneratorConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Generating Umai app icons from mascot");

    let config = GeneratorConfig::default();
    let outcome = mascotgen_render::generate_all(&config);
    report::report_outcome(&config, outcome);
}
