// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ifc2scr` - convert IFC beams and columns into drafting scripts.
//!
//! Reads the per-element edge meshes exported by a geometry kernel and writes
//! two scripts: every element's full wireframe, and one idealized centerline
//! per element.
//!
//! Usage:
//!   ifc2scr <INPUT> [--full 3dModel.scr] [--ideal IdealModel.scr] [options]
//!
//! Defaults come from `IFC_SCR_*` environment variables; flags override them.

use anyhow::Context;
use clap::Parser;
use ifc_scr_processing::{FailurePolicy, MeshDumpKernel, Pipeline, PipelineConfig};

mod cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = cli::Command::parse();
    let config = args.apply(PipelineConfig::from_env());

    let pipeline = Pipeline::new(MeshDumpKernel::new(), config);
    tracing::debug!(config = ?pipeline.config(), "Pipeline configuration");

    let stats = pipeline
        .run(&args.input, &args.full, &args.ideal)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    if stats.skipped > 0 {
        tracing::warn!(skipped = stats.skipped, "Some elements have no centerline");
    }
    println!(
        "Exported {} elements to {} and {}",
        stats.elements(),
        args.full.display(),
        args.ideal.display()
    );
    Ok(())
}

impl cli::Command {
    /// Overlay command-line flags on an environment-derived config
    fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(types) = &self.types {
            config.set_element_types(types.iter().copied());
        }
        if let Some(tolerance) = self.z_tolerance {
            config.z_tolerance = tolerance;
        }
        if let Some(levels) = self.column_levels {
            config.column_levels = levels;
        }
        if self.local_coords {
            config.use_world_coords = false;
        }
        if self.strict {
            config.on_idealization_error = FailurePolicy::Abort;
        }
        if self.parallel {
            config.parallel = true;
        }
        config
    }
}
