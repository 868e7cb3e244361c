// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for face triangulation.

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while triangulating mesh faces.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// At least 3 vertices are required to define a polygon.
    #[error("polygon has {0} vertices, need at least 3")]
    TooFewVertices(usize),

    /// The first three vertices are collinear, so no plane normal exists.
    #[error("degenerate normal: first three vertices are collinear")]
    DegenerateNormal,

    /// A face references the same mesh vertex twice.
    #[error("face repeats mesh vertex {0}")]
    DuplicateVertex(u32),

    /// The ear scan exhausted every candidate without clipping an ear.
    /// The polygon is non-simple, degenerate, or the tolerance is too tight.
    #[error("no ear found with {remaining} vertices remaining")]
    NoEarFound {
        /// Vertices still on the working polygon when the scan gave up.
        remaining: usize,
    },
}
