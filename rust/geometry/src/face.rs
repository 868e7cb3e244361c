// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-face triangulation over a mesh vertex accessor.
//!
//! The entry points here tie the pipeline together: gather a face's 3D
//! points through [`VertexSource`], project them into a 2D working frame,
//! and triangulate — fanning convex faces directly and ear-clipping the
//! rest. Output indices are in mesh space.

use nalgebra::Point3;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::convex::is_convex;
use crate::earclip::triangulate_indexed;
use crate::error::{Error, Result};
use crate::projection::project_points;

/// Read-only accessor mapping a mesh vertex index to its 3D position.
///
/// Supplied by the mesh/scene layer. Implementations must stay immutable
/// for the duration of a triangulation call.
pub trait VertexSource {
    /// Position of the vertex at `index`.
    fn vertex(&self, index: u32) -> Point3<f64>;
}

impl VertexSource for [Point3<f64>] {
    fn vertex(&self, index: u32) -> Point3<f64> {
        self[index as usize]
    }
}

impl VertexSource for Vec<Point3<f64>> {
    fn vertex(&self, index: u32) -> Point3<f64> {
        self[index as usize]
    }
}

/// Validate a face and gather its 3D points.
fn gather_face<S: VertexSource + ?Sized>(source: &S, face: &[u32]) -> Result<Vec<Point3<f64>>> {
    if face.len() < 3 {
        return Err(Error::TooFewVertices(face.len()));
    }
    let mut seen = FxHashSet::default();
    for &index in face {
        if !seen.insert(index) {
            return Err(Error::DuplicateVertex(index));
        }
    }
    Ok(face.iter().map(|&index| source.vertex(index)).collect())
}

/// Fan triangulation from the face's first vertex.
fn fan_triangulate(face: &[u32]) -> Vec<u32> {
    let n = face.len();
    let mut triangles = Vec::with_capacity((n - 2) * 3);
    for i in 1..n - 1 {
        triangles.push(face[0]);
        triangles.push(face[i]);
        triangles.push(face[i + 1]);
    }
    triangles
}

/// Triangulate one near-planar mesh face into mesh-space index triples.
///
/// Returns a flat list of `face.len() - 2` triangles on success. Triangle
/// faces pass through in their original cyclic order; faces whose projected
/// polygon is convex fan out from the first vertex; the rest go through ear
/// clipping in the projected plane.
pub fn triangulate_face<S: VertexSource + ?Sized>(
    source: &S,
    face: &[u32],
    eps: f64,
) -> Result<Vec<u32>> {
    let points = gather_face(source, face)?;

    if face.len() == 3 {
        return Ok(face.to_vec());
    }

    let (polygon, _frame) = project_points(&points, eps)?;

    if is_convex(&polygon) {
        return Ok(fan_triangulate(face));
    }

    let slots = (0..face.len() as u32).collect();
    let triangles = match triangulate_indexed(polygon, slots, eps) {
        Ok(triangles) => triangles,
        Err(err) => {
            tracing::debug!(vertices = face.len(), error = %err, "face triangulation failed");
            return Err(err);
        }
    };
    Ok(triangles
        .into_iter()
        .map(|slot| face[slot as usize])
        .collect())
}

/// Convexity of a mesh face, evaluated in its projected plane.
pub fn face_is_convex<S: VertexSource + ?Sized>(
    source: &S,
    face: &[u32],
    eps: f64,
) -> Result<bool> {
    let points = gather_face(source, face)?;
    if face.len() == 3 {
        return Ok(true);
    }
    let (polygon, _frame) = project_points(&points, eps)?;
    Ok(is_convex(&polygon))
}

/// Triangulate many faces in parallel.
///
/// One result per face, in input order. Failed faces do not affect their
/// neighbors; callers decide whether to skip or repair them.
pub fn triangulate_faces<S>(source: &S, faces: &[Vec<u32>], eps: f64) -> Vec<Result<Vec<u32>>>
where
    S: VertexSource + Sync + ?Sized,
{
    faces
        .par_iter()
        .map(|face| triangulate_face(source, face, eps))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::DEFAULT_EPSILON;

    fn grid_vertices() -> Vec<Point3<f64>> {
        // A 3x3 point grid in the XY plane, tilted slightly so the face
        // normal is near but not exactly Z.
        let mut vertices = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                vertices.push(Point3::new(x as f64, y as f64, x as f64 * 1e-4));
            }
        }
        vertices
    }

    #[test]
    fn triangle_face_passes_through() {
        let vertices = grid_vertices();
        let triangles = triangulate_face(&vertices, &[2, 4, 6], DEFAULT_EPSILON).unwrap();
        assert_eq!(triangles, vec![2, 4, 6]);
    }

    #[test]
    fn convex_quad_fans_out() {
        let vertices = grid_vertices();
        let triangles = triangulate_face(&vertices, &[0, 2, 8, 6], DEFAULT_EPSILON).unwrap();
        assert_eq!(triangles, vec![0, 2, 8, 0, 8, 6]);
    }

    #[test]
    fn concave_face_is_ear_clipped() {
        // L-shaped face over the grid: not convex, so the fan path cannot
        // be taken.
        let vertices = grid_vertices();
        let face = [0, 2, 5, 4, 7, 6];
        assert!(!face_is_convex(&vertices, &face, DEFAULT_EPSILON).unwrap());
        let triangles = triangulate_face(&vertices, &face, DEFAULT_EPSILON).unwrap();
        assert_eq!(triangles.len(), 4 * 3);
        let mut used: Vec<u32> = triangles.clone();
        used.sort_unstable();
        used.dedup();
        let mut expected = face.to_vec();
        expected.sort_unstable();
        assert_eq!(used, expected);
    }

    #[test]
    fn face_convexity_queries() {
        let vertices = grid_vertices();
        assert!(face_is_convex(&vertices, &[0, 2, 8, 6], DEFAULT_EPSILON).unwrap());
        assert!(!face_is_convex(&vertices, &[0, 2, 5, 4, 7, 6], DEFAULT_EPSILON).unwrap());
    }

    #[test]
    fn duplicate_vertex_is_rejected() {
        let vertices = grid_vertices();
        assert!(matches!(
            triangulate_face(&vertices, &[0, 2, 2, 6], DEFAULT_EPSILON),
            Err(Error::DuplicateVertex(2))
        ));
    }

    #[test]
    fn short_face_is_rejected() {
        let vertices = grid_vertices();
        assert!(matches!(
            triangulate_face(&vertices, &[0, 1], DEFAULT_EPSILON),
            Err(Error::TooFewVertices(2))
        ));
    }

    #[test]
    fn collinear_leading_vertices_are_rejected() {
        let vertices = grid_vertices();
        // 0, 1, 2 lie on one line of the grid.
        assert!(matches!(
            triangulate_face(&vertices, &[0, 1, 2, 4], DEFAULT_EPSILON),
            Err(Error::DegenerateNormal)
        ));
    }

    #[test]
    fn batch_triangulation_keeps_input_order() {
        let vertices = grid_vertices();
        let faces = vec![vec![0, 2, 8, 6], vec![0, 1, 4, 3], vec![0u32, 1]];
        let results = triangulate_faces(&vertices, &faces, DEFAULT_EPSILON);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 6);
        assert_eq!(results[1].as_ref().unwrap().len(), 6);
        assert!(results[2].is_err());
    }
}
