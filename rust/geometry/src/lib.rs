// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-SCR Geometry
//!
//! Geometric abstraction of structural elements: decode the flat
//! vertex/edge buffers produced by a geometry kernel into line segments, then
//! collapse an element's wireframe into a single centerline.
//!
//! ```rust,ignore
//! use ifc_scr_geometry::{decode_mesh, idealize_beam, IdealizeOptions};
//!
//! let wireframe = decode_mesh(&vertices, &edges)?;
//! let centerline = idealize_beam(&wireframe, &IdealizeOptions::default())?;
//! ```

pub mod decoder;
pub mod elevation;
pub mod error;
pub mod idealize;
pub mod segment;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;

pub use decoder::{decode_mesh, decode_points, unique_edges};
pub use elevation::{ElevationTolerance, Levels};
pub use error::{Error, IdealizationFailure, MeshDefect, Result};
pub use idealize::{idealize_beam, idealize_column, ColumnLevels, IdealizeOptions};
pub use segment::{endpoint_centroid, max_elevation, Segment};
