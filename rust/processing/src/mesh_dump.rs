// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kernel backed by a JSON mesh dump
//!
//! An external tessellator writes one record per element:
//!
//! ```json
//! { "elements": [
//!     { "type": "IfcBeam", "global_id": "2O2Fr$t4X7Zf8NOew3FLOH", "tag": "B-1",
//!       "vertices": [0.0, 0.0, 0.0, ...], "edges": [0, 1, ...],
//!       "placement": [1.0, 0.0, 0.0, 0.0, ...] }
//! ] }
//! ```
//!
//! `placement` is an optional column-major 4x4 local-to-world matrix. It is
//! applied only when [`KernelSettings::use_world_coords`] is set.

use crate::error::{Error, Result};
use crate::kernel::{ElementGeometry, ElementType, GeometryKernel, KernelSettings, TypeGeometry};
use nalgebra::{Matrix4, Point3};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MeshDump {
    elements: Vec<DumpElement>,
}

#[derive(Debug, Deserialize)]
struct DumpElement {
    #[serde(rename = "type")]
    ifc_type: String,
    global_id: String,
    #[serde(default)]
    tag: Option<String>,
    vertices: Vec<f64>,
    edges: Vec<u32>,
    #[serde(default)]
    placement: Option<Vec<f64>>,
}

/// Reads pre-tessellated element meshes from a JSON dump
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshDumpKernel;

impl MeshDumpKernel {
    pub fn new() -> Self {
        Self
    }

    /// Parse dump content already in memory
    pub fn parse(
        &self,
        content: &str,
        types: &[ElementType],
        settings: &KernelSettings,
    ) -> Result<Vec<TypeGeometry>> {
        let dump: MeshDump = serde_json::from_str(content)?;
        let mut by_type: Vec<TypeGeometry> = types.iter().map(|&t| TypeGeometry::new(t)).collect();

        for element in dump.elements {
            let element_type = match element.ifc_type.parse::<ElementType>() {
                Ok(t) => t,
                Err(_) => {
                    tracing::debug!(ifc_type = %element.ifc_type, global_id = %element.global_id, "Skipping unsupported element type");
                    continue;
                }
            };
            let Some(slot) = by_type.iter_mut().find(|g| g.element_type == element_type) else {
                continue;
            };

            let mut vertices = element.vertices;
            if settings.use_world_coords {
                if let Some(placement) = &element.placement {
                    let transform = placement_matrix(placement, &element.global_id)?;
                    transform_vertices(&mut vertices, &transform);
                }
            }

            slot.elements.push(ElementGeometry {
                element_type,
                global_id: element.global_id,
                tag: element.tag.unwrap_or_default(),
                vertices,
                edges: element.edges,
            });
        }

        Ok(by_type)
    }
}

impl GeometryKernel for MeshDumpKernel {
    fn read_geometry(
        &self,
        model: &Path,
        types: &[ElementType],
        settings: &KernelSettings,
    ) -> Result<Vec<TypeGeometry>> {
        let content = std::fs::read_to_string(model).map_err(|e| Error::io(model, e))?;
        tracing::debug!(path = %model.display(), size = content.len(), "Read mesh dump");
        self.parse(&content, types, settings)
    }
}

fn placement_matrix(values: &[f64], global_id: &str) -> Result<Matrix4<f64>> {
    if values.len() != 16 {
        return Err(Error::Kernel(format!(
            "element {} has a placement of {} values, expected 16",
            global_id,
            values.len()
        )));
    }
    Ok(Matrix4::from_column_slice(values))
}

/// Apply a placement to a flat vertex buffer in place
///
/// A buffer that is not a whole number of points is left untouched for the
/// decoder to reject.
fn transform_vertices(vertices: &mut [f64], transform: &Matrix4<f64>) {
    if vertices.len() % 3 != 0 {
        return;
    }
    vertices.chunks_exact_mut(3).for_each(|chunk| {
        let transformed = transform.transform_point(&Point3::new(chunk[0], chunk[1], chunk[2]));
        chunk[0] = transformed.x;
        chunk[1] = transformed.y;
        chunk[2] = transformed.z;
    });
}
