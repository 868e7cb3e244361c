// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon diagonal validation.

use nalgebra::Point2;

use crate::cone::segment_in_cone;
use crate::segment::segments_intersect;

/// True iff the segment from vertex `i0` to vertex `i1` is a diagonal of
/// `polygon`: it leaves `i0` through the interior cone and crosses no
/// polygon edge disjoint from both endpoints.
///
/// Assumes clockwise winding, like [`segment_in_cone`]. O(n) per call.
pub fn is_diagonal(polygon: &[Point2<f64>], i0: usize, i1: usize, eps: f64) -> bool {
    let size = polygon.len();
    let prev = (i0 + size - 1) % size;
    let next = (i0 + 1) % size;

    if !segment_in_cone(polygon[i0], polygon[i1], polygon[prev], polygon[next]) {
        return false;
    }

    // Walk every edge (j1, j0), the last edge wrapping back to vertex 0,
    // skipping edges that share an endpoint with the candidate.
    let mut j1 = size - 1;
    for j0 in 0..size {
        if j0 != i0
            && j0 != i1
            && j1 != i0
            && j1 != i1
            && segments_intersect(polygon[i0], polygon[i1], polygon[j0], polygon[j1], eps)
        {
            return false;
        }
        j1 = j0;
    }
    true
}
