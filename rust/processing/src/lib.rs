// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-SCR processing pipeline
//!
//! Reads per-element edge meshes from a geometry kernel, decodes and
//! idealizes them with `ifc-scr-geometry`, and writes two drafting scripts:
//! the full wireframe of every element and one centerline per element.

pub mod config;
pub mod error;
pub mod kernel;
pub mod mesh_dump;
pub mod pipeline;
pub mod scr;

pub use config::{FailurePolicy, PipelineConfig};
pub use error::{Error, Result};
pub use kernel::{
    ElementGeometry, ElementKey, ElementType, GeometryKernel, KernelSettings, TypeGeometry,
};
pub use mesh_dump::MeshDumpKernel;
pub use pipeline::{
    convert_geometry, process_element, process_file, Pipeline, ProcessedElement, ProcessingStats,
};
pub use scr::ScrWriter;

// Re-export the idealizer knobs that appear in the configuration
pub use ifc_scr_geometry::{ColumnLevels, ElevationTolerance};
