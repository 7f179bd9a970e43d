// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or idealizing an element
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Kernel output violates the buffer contract
    #[error("Malformed mesh: {0}")]
    MalformedMesh(#[from] MeshDefect),

    /// The wireframe lacks the structure an idealizer needs
    #[error("Idealization failed: {0}")]
    Idealization(#[from] IdealizationFailure),
}

impl Error {
    pub fn is_malformed_mesh(&self) -> bool {
        matches!(self, Error::MalformedMesh(_))
    }
}

/// What is wrong with a vertex or edge buffer
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MeshDefect {
    #[error("vertex buffer length {len} is not a multiple of 3")]
    VertexBufferLength { len: usize },

    #[error("edge buffer length {len} is not a multiple of 2")]
    EdgeBufferLength { len: usize },

    #[error("edge index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteVertex { vertex: usize },
}

/// Why an element could not be reduced to a centerline
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IdealizationFailure {
    #[error("element has no segments")]
    EmptyWireframe,

    #[error("no segment lies entirely at the top elevation {z_max}")]
    NoTopLines { z_max: f64 },

    #[error("all top-line midpoints coincide")]
    ZeroLengthBeam,

    #[error("no horizontal segments")]
    NoHorizontalSegments,

    #[error("only {levels} horizontal level(s), need a top and a bottom")]
    MissingBottomLevel { levels: usize },
}
