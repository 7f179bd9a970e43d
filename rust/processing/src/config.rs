// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration loaded from environment variables.

use crate::kernel::{ElementType, KernelSettings};
use ifc_scr_geometry::{ColumnLevels, ElevationTolerance, IdealizeOptions};

/// What to do when an element cannot be idealized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log a warning, keep the wireframe, omit the centerline
    #[default]
    Skip,
    /// Fail the whole run
    Abort,
}

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Element types to convert, in output order.
    pub element_types: Vec<ElementType>,
    /// Bake element placements into vertex coordinates.
    pub use_world_coords: bool,
    /// Absolute tolerance for grouping elevations.
    pub z_tolerance: f64,
    /// Which levels feed a column's bottom point.
    pub column_levels: ColumnLevels,
    /// Idealization failure handling.
    pub on_idealization_error: FailurePolicy,
    /// Decode and idealize elements on the rayon pool.
    pub parallel: bool,
}

impl PipelineConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from `IFC_SCR_*` variables served by `lookup`.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |name: &str| lookup(name).as_deref().and_then(parse_flag);
        let defaults = Self::default();

        Self {
            element_types: defaults.element_types,
            use_world_coords: flag("IFC_SCR_WORLD_COORDS").unwrap_or(defaults.use_world_coords),
            z_tolerance: lookup("IFC_SCR_Z_TOLERANCE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.z_tolerance),
            column_levels: lookup("IFC_SCR_COLUMN_LEVELS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.column_levels),
            on_idealization_error: match flag("IFC_SCR_STRICT") {
                Some(true) => FailurePolicy::Abort,
                Some(false) => FailurePolicy::Skip,
                None => defaults.on_idealization_error,
            },
            parallel: flag("IFC_SCR_PARALLEL").unwrap_or(defaults.parallel),
        }
    }

    /// Replace the converted types, keeping first-occurrence order and
    /// dropping repeats so each type gets exactly one output group.
    pub fn set_element_types(&mut self, types: impl IntoIterator<Item = ElementType>) {
        self.element_types.clear();
        for ty in types {
            if !self.element_types.contains(&ty) {
                self.element_types.push(ty);
            }
        }
    }

    pub fn kernel_settings(&self) -> KernelSettings {
        KernelSettings {
            use_world_coords: self.use_world_coords,
        }
    }

    pub fn idealize_options(&self) -> IdealizeOptions {
        IdealizeOptions {
            tolerance: ElevationTolerance::new(self.z_tolerance),
            column_levels: self.column_levels,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            element_types: ElementType::ALL.to_vec(),
            use_world_coords: true,
            z_tolerance: ElevationTolerance::DEFAULT.value(),
            column_levels: ColumnLevels::default(),
            on_idealization_error: FailurePolicy::default(),
            parallel: false,
        }
    }
}

/// Parse a boolean-ish value (`1/0`, `true/false`, `yes/no`, `on/off`)
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
