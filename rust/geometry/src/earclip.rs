// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ear-clipping triangulation of simple polygons.
//!
//! The triangulator owns its working polygon and index list and consumes
//! them in place, one ear at a time, until only the final triangle remains.
//! O(n²) for typical inputs, O(n³) worst case.

use nalgebra::Point2;

use crate::diagonal::is_diagonal;
use crate::error::{Error, Result};

/// Signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

/// Triangulate a simple polygon, carrying a parallel index list.
///
/// Takes ownership of both working copies and shrinks them as ears are
/// clipped. Returns the flat triangle list as triples of `indices` entries;
/// a polygon of n vertices yields `n - 2` triangles. A 3-vertex polygon
/// passes through as a single triangle in its original cyclic order.
///
/// Fails with [`Error::NoEarFound`] when a full scan cannot clip an ear,
/// which signals non-simple, degenerate, or numerically ill-conditioned
/// input; no partial triangle list is returned in that case.
///
/// # Panics
///
/// Panics if `polygon` and `indices` have different lengths.
pub fn triangulate_indexed(
    mut polygon: Vec<Point2<f64>>,
    mut indices: Vec<u32>,
    eps: f64,
) -> Result<Vec<u32>> {
    assert_eq!(
        polygon.len(),
        indices.len(),
        "polygon and index list must stay parallel"
    );
    if polygon.len() < 3 {
        return Err(Error::TooFewVertices(polygon.len()));
    }

    // The interior predicates assume clockwise winding, so mirror the
    // working copy when the input winds the other way. The index list is
    // untouched and emitted triangles keep the caller's vertex order.
    if signed_area(&polygon) > 0.0 {
        for p in &mut polygon {
            p.y = -p.y;
        }
    }

    let mut triangles = Vec::with_capacity((polygon.len() - 2) * 3);
    while polygon.len() > 3 {
        let size = polygon.len();
        let mut clipped = false;
        for i0 in 0..size {
            let i1 = (i0 + 1) % size;
            let i2 = (i0 + 2) % size;
            if is_diagonal(&polygon, i0, i2, eps) {
                triangles.extend_from_slice(&[indices[i0], indices[i1], indices[i2]]);
                polygon.remove(i1);
                indices.remove(i1);
                clipped = true;
                break;
            }
        }
        if !clipped {
            tracing::warn!(
                remaining = polygon.len(),
                "ear scan exhausted, polygon is not simple"
            );
            return Err(Error::NoEarFound {
                remaining: polygon.len(),
            });
        }
    }

    triangles.extend_from_slice(&indices);
    Ok(triangles)
}

/// Triangulate a simple polygon; returned indices refer to `points` slots.
pub fn triangulate_polygon(points: &[Point2<f64>], eps: f64) -> Result<Vec<u32>> {
    triangulate_indexed(points.to_vec(), (0..points.len() as u32).collect(), eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::DEFAULT_EPSILON;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn triangle_area(points: &[Point2<f64>], t: &[u32]) -> f64 {
        signed_area(&[
            points[t[0] as usize],
            points[t[1] as usize],
            points[t[2] as usize],
        ])
        .abs()
    }

    fn total_area(points: &[Point2<f64>], triangles: &[u32]) -> f64 {
        triangles
            .chunks_exact(3)
            .map(|t| triangle_area(points, t))
            .sum()
    }

    #[test]
    fn triangle_passes_through_in_input_order() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.5, 1.0)];
        let triangles = triangulate_polygon(&points, DEFAULT_EPSILON).unwrap();
        assert_eq!(triangles, vec![0, 1, 2]);
    }

    #[test]
    fn square_yields_two_triangles() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let triangles = triangulate_polygon(&points, DEFAULT_EPSILON).unwrap();
        assert_eq!(triangles.len(), 6);
        assert_relative_eq!(total_area(&points, &triangles), 1.0);
    }

    #[test]
    fn l_shape_yields_four_triangles_covering_the_area() {
        let points = vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ];
        let triangles = triangulate_polygon(&points, DEFAULT_EPSILON).unwrap();
        assert_eq!(triangles.len(), 4 * 3);
        assert_relative_eq!(total_area(&points, &triangles), 3.0);

        let mut used: Vec<u32> = triangles.clone();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn clockwise_input_triangulates_too() {
        let points = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        let triangles = triangulate_polygon(&points, DEFAULT_EPSILON).unwrap();
        assert_eq!(triangles.len(), 6);
        assert_relative_eq!(total_area(&points, &triangles), 1.0);
    }

    #[test]
    fn index_list_maps_triangles_back() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let indices = vec![10, 11, 12, 13];
        let triangles = triangulate_indexed(points, indices, DEFAULT_EPSILON).unwrap();
        assert_eq!(triangles.len(), 6);
        assert!(triangles.iter().all(|&i| (10..=13).contains(&i)));
    }

    #[test]
    fn pentagram_has_no_ear() {
        // A five-pointed star drawn without lifting the pen intersects
        // itself on every edge; every candidate fails the cone test.
        let points: Vec<Point2<f64>> = (0..5)
            .map(|k| {
                let angle = (90.0 + 144.0 * k as f64).to_radians();
                p(angle.cos(), angle.sin())
            })
            .collect();
        match triangulate_polygon(&points, DEFAULT_EPSILON) {
            Err(Error::NoEarFound { remaining }) => assert_eq!(remaining, 5),
            other => panic!("expected NoEarFound, got {other:?}"),
        }
    }

    #[test]
    fn two_vertices_are_rejected() {
        let result = triangulate_polygon(&[p(0.0, 0.0), p(1.0, 0.0)], DEFAULT_EPSILON);
        assert!(matches!(result, Err(Error::TooFewVertices(2))));
    }
}
