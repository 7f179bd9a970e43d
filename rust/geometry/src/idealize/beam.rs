// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Beam centerline: longest midpoint-to-midpoint line across the top chord

use super::IdealizeOptions;
use crate::elevation::ElevationTolerance;
use crate::error::{IdealizationFailure, Result};
use crate::segment::{max_elevation, Segment};

/// Segments with both endpoints at the highest elevation
pub fn top_lines(segments: &[Segment], tolerance: ElevationTolerance) -> Vec<Segment> {
    let Some(z_max) = max_elevation(segments) else {
        return Vec::new();
    };

    segments
        .iter()
        .filter(|s| tolerance.same_level(s.start.z, z_max) && tolerance.same_level(s.end.z, z_max))
        .copied()
        .collect()
}

/// Idealize a beam wireframe
///
/// Every unordered pair of top lines (a line paired with itself included)
/// yields a candidate joining their midpoints; the longest candidate wins and
/// ties keep the first one found.
pub fn idealize_beam(segments: &[Segment], options: &IdealizeOptions) -> Result<Segment> {
    let z_max = max_elevation(segments).ok_or(IdealizationFailure::EmptyWireframe)?;

    let midpoints: Vec<_> = top_lines(segments, options.tolerance)
        .iter()
        .map(Segment::midpoint)
        .collect();
    if midpoints.is_empty() {
        return Err(IdealizationFailure::NoTopLines { z_max }.into());
    }

    let mut best: Option<(Segment, f64)> = None;
    for (i, start) in midpoints.iter().enumerate() {
        for end in &midpoints[i..] {
            let candidate = Segment::new(*start, *end);
            let length = candidate.length();
            if best.map_or(true, |(_, best_length)| length > best_length) {
                best = Some((candidate, length));
            }
        }
    }

    match best {
        Some((line, length)) if length > 0.0 => Ok(line),
        _ => Err(IdealizationFailure::ZeroLengthBeam.into()),
    }
}
