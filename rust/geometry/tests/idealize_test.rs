// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// End-to-end decode + idealize on triangulated box solids, laid out the way
// a geometry kernel emits them (every triangle contributes its three edges).

use approx::assert_relative_eq;
use ifc_scr_geometry::{
    decode_mesh, idealize_beam, idealize_column, Error, IdealizationFailure, IdealizeOptions,
    MeshDefect,
};

/// Axis-aligned box as a flat vertex buffer and triangle-edge buffer
fn box_mesh(min: [f64; 3], max: [f64; 3]) -> (Vec<f64>, Vec<u32>) {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;
    let vertices = vec![
        x0, y0, z0, x1, y0, z0, x1, y1, z0, x0, y1, z0, //
        x0, y0, z1, x1, y0, z1, x1, y1, z1, x0, y1, z1,
    ];
    let triangles: [[u32; 3]; 12] = [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];
    let edges = triangles
        .iter()
        .flat_map(|&[a, b, c]| [a, b, b, c, c, a])
        .collect();
    (vertices, edges)
}

#[test]
fn test_box_wireframe_edge_count() {
    let (vertices, edges) = box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    let segments = decode_mesh(&vertices, &edges).unwrap();

    // 12 box edges + 6 face diagonals
    assert_eq!(segments.len(), 18);
}

#[test]
fn test_box_beam_centerline() {
    let (vertices, edges) = box_mesh([0.0, 0.0, 0.0], [6.0, 0.3, 0.5]);
    let segments = decode_mesh(&vertices, &edges).unwrap();

    let line = idealize_beam(&segments, &IdealizeOptions::default()).unwrap();

    assert_relative_eq!(line.length(), 6.0);
    assert_relative_eq!(line.start.y, 0.15);
    assert_relative_eq!(line.end.y, 0.15);
    assert_eq!(line.start.z, 0.5);
    assert_eq!(line.end.z, 0.5);
    assert_relative_eq!(line.start.x.min(line.end.x), 0.0);
    assert_relative_eq!(line.start.x.max(line.end.x), 6.0);
}

#[test]
fn test_box_column_centerline() {
    let (vertices, edges) = box_mesh([1.0, 2.0, 0.0], [1.4, 2.4, 3.0]);
    let segments = decode_mesh(&vertices, &edges).unwrap();

    let line = idealize_column(&segments, &IdealizeOptions::default()).unwrap();

    assert_relative_eq!(line.start.x, 1.2, epsilon = 1e-12);
    assert_relative_eq!(line.start.y, 2.2, epsilon = 1e-12);
    assert_eq!(line.start.z, 0.0);
    assert_relative_eq!(line.end.x, 1.2, epsilon = 1e-12);
    assert_relative_eq!(line.end.y, 2.2, epsilon = 1e-12);
    assert_eq!(line.end.z, 3.0);
}

#[test]
fn test_translated_mesh_translates_centerline() {
    let (vertices, edges) = box_mesh([0.0, 0.0, 0.0], [6.0, 0.3, 0.5]);
    let shifted: Vec<f64> = vertices
        .chunks_exact(3)
        .flat_map(|p| [p[0] + 10.0, p[1] - 5.0, p[2] + 3.0])
        .collect();

    let base = idealize_beam(&decode_mesh(&vertices, &edges).unwrap(), &IdealizeOptions::default())
        .unwrap();
    let moved = idealize_beam(&decode_mesh(&shifted, &edges).unwrap(), &IdealizeOptions::default())
        .unwrap();

    assert_relative_eq!(base.length(), moved.length(), epsilon = 1e-9);
    assert_relative_eq!(moved.start.z, base.start.z + 3.0);
}

#[test]
fn test_sloped_beam_has_no_top_lines() {
    // Triangle whose vertices all sit at different elevations
    let vertices = vec![0.0, 0.0, 0.0, 5.0, 0.0, 1.0, 5.0, 1.0, 2.0];
    let edges = vec![0, 1, 1, 2, 2, 0];
    let segments = decode_mesh(&vertices, &edges).unwrap();

    let err = idealize_beam(&segments, &IdealizeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Idealization(IdealizationFailure::NoTopLines { .. })
    ));
}

#[test]
fn test_truncated_vertex_buffer_is_rejected() {
    let (mut vertices, edges) = box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    vertices.pop();

    let err = decode_mesh(&vertices, &edges).unwrap_err();
    assert!(err.is_malformed_mesh());
    assert_eq!(err, Error::MalformedMesh(MeshDefect::VertexBufferLength { len: 23 }));
}
