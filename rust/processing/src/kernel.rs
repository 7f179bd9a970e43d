// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry-kernel seam
//!
//! Parsing the model and tessellating element solids is the kernel's job.
//! This crate only consumes its output: per element, a flat vertex buffer, a
//! flat edge-index buffer and the element's identifying labels.

use crate::error::Result;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Structural element types the pipeline knows how to idealize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementType {
    Beam,
    Column,
}

impl ElementType {
    pub const ALL: [ElementType; 2] = [ElementType::Beam, ElementType::Column];

    /// IFC entity name, e.g. `IfcBeam`
    pub fn ifc_name(&self) -> &'static str {
        match self {
            ElementType::Beam => "IfcBeam",
            ElementType::Column => "IfcColumn",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ifc_name())
    }
}

impl FromStr for ElementType {
    type Err = String;

    /// Accepts `IfcBeam`, `IFCBEAM` and `beam` spellings. The IFC4
    /// `*StandardCase` subtypes map to their parent type.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        match name.strip_prefix("IFC").unwrap_or(name.as_str()) {
            "BEAM" | "BEAMSTANDARDCASE" => Ok(ElementType::Beam),
            "COLUMN" | "COLUMNSTANDARDCASE" => Ok(ElementType::Column),
            _ => Err(format!("unsupported element type '{}'", s.trim())),
        }
    }
}

/// Settings handed to the kernel on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelSettings {
    /// Bake each element's placement into its vertices
    pub use_world_coords: bool,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            use_world_coords: true,
        }
    }
}

/// Raw kernel output for one element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementGeometry {
    pub element_type: ElementType,
    /// IFC GlobalId
    pub global_id: String,
    /// IFC Tag attribute (opaque)
    pub tag: String,
    /// Flat `x, y, z, ...` buffer
    pub vertices: Vec<f64>,
    /// Flat `a, b, ...` index pairs into `vertices`
    pub edges: Vec<u32>,
}

impl ElementGeometry {
    pub fn key(&self) -> ElementKey {
        ElementKey::new(&self.global_id, &self.tag)
    }
}

/// Label for logging and error context
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(String);

impl ElementKey {
    pub fn new(global_id: &str, tag: &str) -> Self {
        Self(format!("UUID: {} Tag:{}", global_id, tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// All elements of one type, in kernel enumeration order
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGeometry {
    pub element_type: ElementType,
    pub elements: Vec<ElementGeometry>,
}

impl TypeGeometry {
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            elements: Vec::new(),
        }
    }
}

/// Anything that can turn a model file into per-element edge meshes
pub trait GeometryKernel {
    /// Read every element of the requested types.
    ///
    /// Returns one [`TypeGeometry`] per requested type, in request order,
    /// even when a type has no elements.
    fn read_geometry(
        &self,
        model: &Path,
        types: &[ElementType],
        settings: &KernelSettings,
    ) -> Result<Vec<TypeGeometry>>;
}
