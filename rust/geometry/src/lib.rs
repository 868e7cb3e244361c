// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Tessera Geometry
//!
//! Planar-face triangulation for 3D meshes using ear clipping and nalgebra
//! for the plane projection.
//!
//! A near-planar polygonal face is rotated into a 2D working frame, tested
//! for convexity, and triangulated into mesh-space index triples that a
//! rendering layer can consume directly. The underlying geometric
//! predicates — segment intersection, interval overlap, cone and diagonal
//! tests — are exposed on their own for pick/cull code.

pub mod cone;
pub mod convex;
pub mod diagonal;
pub mod earclip;
pub mod error;
pub mod face;
pub mod interval;
pub mod mesh;
pub mod projection;
pub mod segment;
pub mod tolerance;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use cone::segment_in_cone;
pub use convex::is_convex;
pub use diagonal::is_diagonal;
pub use earclip::{signed_area, triangulate_indexed, triangulate_polygon};
pub use error::{Error, Result};
pub use face::{face_is_convex, triangulate_face, triangulate_faces, VertexSource};
pub use interval::interval_overlap;
pub use mesh::Mesh;
pub use projection::{project_points, Axis, PlaneFrame};
pub use segment::{intersect_segments, segments_intersect};
pub use tolerance::DEFAULT_EPSILON;
