// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line segments and the point helpers shared by the decoder and idealizers

use crate::elevation::ElevationTolerance;
use nalgebra::Point3;

/// A 3D line between two points
///
/// Endpoint order is kept as given: `(a, b)` and `(b, a)` are different values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Segment {
    #[inline]
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Build a segment from two `(x, y, z)` tuples
    pub fn from_coords(start: (f64, f64, f64), end: (f64, f64, f64)) -> Self {
        Self {
            start: Point3::new(start.0, start.1, start.2),
            end: Point3::new(end.0, end.1, end.2),
        }
    }

    /// Euclidean length
    #[inline]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.start, &self.end)
    }

    /// Both endpoints sit on the same elevation
    #[inline]
    pub fn is_horizontal(&self, tolerance: ElevationTolerance) -> bool {
        tolerance.same_level(self.start.z, self.end.z)
    }

    /// Mean elevation of the two endpoints
    #[inline]
    pub fn elevation(&self) -> f64 {
        (self.start.z + self.end.z) / 2.0
    }
}

/// Average of every endpoint of `segments`, two samples per segment.
///
/// Returns `None` for an empty slice.
pub fn endpoint_centroid(segments: &[Segment]) -> Option<Point3<f64>> {
    if segments.is_empty() {
        return None;
    }

    let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
    for segment in segments {
        x += segment.start.x + segment.end.x;
        y += segment.start.y + segment.end.y;
        z += segment.start.z + segment.end.z;
    }

    let samples = (segments.len() * 2) as f64;
    Some(Point3::new(x / samples, y / samples, z / samples))
}

/// Highest z over all endpoints, `None` when there are no segments
pub fn max_elevation(segments: &[Segment]) -> Option<f64> {
    segments
        .iter()
        .flat_map(|s| [s.start.z, s.end.z])
        .fold(None, |acc: Option<f64>, z| match acc {
            Some(current) if current >= z => Some(current),
            _ => Some(z),
        })
}
