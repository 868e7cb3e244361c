// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon convexity classification.

use nalgebra::Point2;

/// True if the polygon is convex.
///
/// Walks consecutive edge pairs around the vertex cycle and checks that
/// every turn has the same sign as the first; a single mismatch
/// short-circuits to false. Fewer than 4 vertices are trivially convex.
///
/// Operates on a 2D polygon; project 3D faces into their plane first
/// (see [`crate::face::face_is_convex`]).
pub fn is_convex(points: &[Point2<f64>]) -> bool {
    let n = points.len();
    if n < 4 {
        return true;
    }

    let mut edge1 = points[1] - points[0];
    let mut edge2 = points[2] - points[1];
    let direction = edge1.perp(&edge2) >= 0.0;

    for i in 3..=n {
        edge1 = edge2;
        edge2 = points[i % n] - points[i - 1];
        if (edge1.perp(&edge2) >= 0.0) != direction {
            return false;
        }
    }
    true
}
