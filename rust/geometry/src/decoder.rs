// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh decoding: flat kernel buffers to deduplicated line segments
//!
//! The geometry kernel emits every triangle edge, so an edge shared by two
//! triangles shows up twice (possibly with swapped indices). Index pairs are
//! deduplicated on a canonical `(min, max)` key before coordinates are
//! resolved. The first occurrence keeps its orientation and output follows
//! first-occurrence order.

use crate::error::{MeshDefect, Result};
use crate::segment::Segment;
use nalgebra::Point3;
use rustc_hash::FxHashSet;

/// Group a flat `x, y, z, x, y, z, ...` buffer into points
pub fn decode_points(vertices: &[f64]) -> Result<Vec<Point3<f64>>> {
    if vertices.len() % 3 != 0 {
        return Err(MeshDefect::VertexBufferLength {
            len: vertices.len(),
        }
        .into());
    }

    vertices
        .chunks_exact(3)
        .enumerate()
        .map(|(i, chunk)| -> Result<Point3<f64>> {
            if chunk.iter().all(|c| c.is_finite()) {
                Ok(Point3::new(chunk[0], chunk[1], chunk[2]))
            } else {
                Err(MeshDefect::NonFiniteVertex { vertex: i }.into())
            }
        })
        .collect()
}

/// Group a flat `a, b, a, b, ...` buffer into unique index pairs
///
/// `(a, b)` and `(b, a)` count as the same edge.
pub fn unique_edges(edges: &[u32]) -> Result<Vec<(u32, u32)>> {
    if edges.len() % 2 != 0 {
        return Err(MeshDefect::EdgeBufferLength { len: edges.len() }.into());
    }

    let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
    seen.reserve(edges.len() / 2);

    Ok(edges
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .filter(|&(a, b)| seen.insert((a.min(b), a.max(b))))
        .collect())
}

/// Decode kernel buffers into a deduplicated segment list
pub fn decode_mesh(vertices: &[f64], edges: &[u32]) -> Result<Vec<Segment>> {
    let points = decode_points(vertices)?;
    let pairs = unique_edges(edges)?;

    let resolve = |index: u32| -> Result<Point3<f64>> {
        points.get(index as usize).copied().ok_or_else(|| {
            MeshDefect::IndexOutOfRange {
                index,
                vertex_count: points.len(),
            }
            .into()
        })
    };

    pairs
        .into_iter()
        .map(|(a, b)| -> Result<Segment> { Ok(Segment::new(resolve(a)?, resolve(b)?)) })
        .collect()
}
