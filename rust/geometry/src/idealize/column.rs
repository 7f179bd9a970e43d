// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Column centerline: bottom cross-section centroid to top cross-section centroid

use super::{ColumnLevels, IdealizeOptions};
use crate::elevation::{ElevationTolerance, Levels};
use crate::error::{IdealizationFailure, Result};
use crate::segment::{endpoint_centroid, Segment};

/// Segments whose endpoints share an elevation
pub fn horizontal_segments(segments: &[Segment], tolerance: ElevationTolerance) -> Vec<Segment> {
    segments
        .iter()
        .filter(|s| s.is_horizontal(tolerance))
        .copied()
        .collect()
}

/// Idealize a column wireframe
pub fn idealize_column(segments: &[Segment], options: &IdealizeOptions) -> Result<Segment> {
    if segments.is_empty() {
        return Err(IdealizationFailure::EmptyWireframe.into());
    }

    let horizontal = horizontal_segments(segments, options.tolerance);
    if horizontal.is_empty() {
        return Err(IdealizationFailure::NoHorizontalSegments.into());
    }

    let levels = Levels::cluster(horizontal.iter().map(Segment::elevation), options.tolerance);
    if levels.len() > 2 && options.column_levels == ColumnLevels::CollapseLower {
        tracing::debug!(
            levels = levels.len(),
            "Column has intermediate levels, averaging all lower levels into the bottom point"
        );
    }

    let (top, bottom): (Vec<Segment>, Vec<Segment>) = horizontal
        .iter()
        .partition(|s| levels.is_top(s.elevation()));
    let bottom: Vec<Segment> = match options.column_levels {
        ColumnLevels::CollapseLower => bottom,
        ColumnLevels::LowestOnly => bottom
            .into_iter()
            .filter(|s| levels.is_bottom(s.elevation()))
            .collect(),
    };

    match (endpoint_centroid(&bottom), endpoint_centroid(&top)) {
        (Some(bottom), Some(top)) => Ok(Segment::new(bottom, top)),
        _ => Err(IdealizationFailure::MissingBottomLevel {
            levels: levels.len(),
        }
        .into()),
    }
}
