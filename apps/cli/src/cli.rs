// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::Parser;
use ifc_scr_processing::{ColumnLevels, ElementType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ifc2scr", version, about)]
pub struct Command {
    /// Mesh dump exported by the geometry kernel
    pub input: PathBuf,

    /// Full wireframe script
    #[arg(long, default_value = "3dModel.scr")]
    pub full: PathBuf,

    /// Idealized centerline script
    #[arg(long, default_value = "IdealModel.scr")]
    pub ideal: PathBuf,

    /// Element types to convert, comma separated (e.g. IfcBeam,IfcColumn)
    #[arg(long, value_delimiter = ',')]
    pub types: Option<Vec<ElementType>>,

    /// Absolute tolerance for grouping elevations; 0 for exact equality
    #[arg(long)]
    pub z_tolerance: Option<f64>,

    /// Column bottom point: `collapse` (all lower levels) or `lowest`
    #[arg(long)]
    pub column_levels: Option<ColumnLevels>,

    /// Keep element-local coordinates instead of world coordinates
    #[arg(long)]
    pub local_coords: bool,

    /// Fail the run when an element cannot be idealized
    #[arg(long)]
    pub strict: bool,

    /// Process elements on all cores
    #[arg(long)]
    pub parallel: bool,
}
