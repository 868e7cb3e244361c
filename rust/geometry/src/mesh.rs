// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle-mesh container.

use nalgebra::Point3;

use crate::face::VertexSource;

/// Flat triangle mesh: interleaved vertex positions plus triangle indices.
///
/// Doubles as the canonical [`VertexSource`] implementation, so faces
/// defined over a mesh can be triangulated straight back into it.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (x, y, z interleaved).
    pub positions: Vec<f64>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh with capacity for the given counts.
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Append a vertex, returning its index.
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        let index = (self.positions.len() / 3) as u32;
        self.positions.push(position.x);
        self.positions.push(position.y);
        self.positions.push(position.z);
        index
    }

    /// Append a triangle.
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Append a flat triangle list, e.g. one face's triangulation.
    #[inline]
    pub fn add_triangles(&mut self, triangles: &[u32]) {
        self.indices.extend_from_slice(triangles);
    }

    /// Merge another mesh into this one, offsetting its indices.
    pub fn merge(&mut self, other: &Mesh) {
        if other.is_empty() {
            return;
        }
        let vertex_offset = (self.positions.len() / 3) as u32;
        self.positions.extend_from_slice(&other.positions);
        self.indices
            .extend(other.indices.iter().map(|&i| i + vertex_offset));
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
        for chunk in self.positions.chunks_exact(3) {
            min.x = min.x.min(chunk[0]);
            min.y = min.y.min(chunk[1]);
            min.z = min.z.min(chunk[2]);
            max.x = max.x.max(chunk[0]);
            max.y = max.y.max(chunk[1]);
            max.z = max.z.max(chunk[2]);
        }
        (min, max)
    }

    /// Clear the mesh.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.indices.clear();
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSource for Mesh {
    #[inline]
    fn vertex(&self, index: u32) -> Point3<f64> {
        let i = index as usize * 3;
        Point3::new(self.positions[i], self.positions[i + 1], self.positions[i + 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mesh_is_empty() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn add_vertex_returns_sequential_indices() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.add_vertex(Point3::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(mesh.add_vertex(Point3::new(4.0, 5.0, 6.0)), 1);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.vertex(1), Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn merge_offsets_indices() {
        let mut a = Mesh::new();
        a.add_vertex(Point3::origin());
        a.add_vertex(Point3::new(1.0, 0.0, 0.0));
        a.add_vertex(Point3::new(0.0, 1.0, 0.0));
        a.add_triangle(0, 1, 2);

        let mut b = Mesh::new();
        b.add_vertex(Point3::new(2.0, 0.0, 0.0));
        b.add_vertex(Point3::new(3.0, 0.0, 0.0));
        b.add_vertex(Point3::new(2.0, 1.0, 0.0));
        b.add_triangle(0, 1, 2);

        a.merge(&b);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.triangle_count(), 2);
        assert_eq!(&a.indices[3..], &[3, 4, 5]);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(-1.0, 2.0, 0.5));
        mesh.add_vertex(Point3::new(3.0, -4.0, 1.5));
        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(-1.0, -4.0, 0.5));
        assert_eq!(max, Point3::new(3.0, 2.0, 1.5));
    }
}
