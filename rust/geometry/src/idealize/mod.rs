// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Centerline idealization
//!
//! Reduces an element's full wireframe to a single representative segment:
//!
//! - **Beam**: the longest line joining midpoints of the top-chord edges
//! - **Column**: bottom cross-section centroid to top cross-section centroid
//!
//! Degenerate wireframes are reported as [`IdealizationFailure`]s; no
//! placeholder line is ever returned.
//!
//! [`IdealizationFailure`]: crate::error::IdealizationFailure

mod beam;
mod column;

pub use beam::{idealize_beam, top_lines};
pub use column::{horizontal_segments, idealize_column};

use crate::elevation::ElevationTolerance;

/// Which horizontal levels feed the bottom centroid of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnLevels {
    /// Every level below the top one is averaged together
    #[default]
    CollapseLower,
    /// Only the lowest level is averaged
    LowestOnly,
}

impl std::str::FromStr for ColumnLevels {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collapse" | "collapse-lower" => Ok(ColumnLevels::CollapseLower),
            "lowest" | "lowest-only" => Ok(ColumnLevels::LowestOnly),
            other => Err(format!("unknown column level policy '{}'", other)),
        }
    }
}

/// Knobs shared by both idealizers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IdealizeOptions {
    pub tolerance: ElevationTolerance,
    pub column_levels: ColumnLevels,
}

impl IdealizeOptions {
    /// Exact elevation equality, literal column behavior
    pub fn exact() -> Self {
        Self {
            tolerance: ElevationTolerance::EXACT,
            column_levels: ColumnLevels::CollapseLower,
        }
    }
}
