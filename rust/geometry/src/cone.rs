// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interior-cone predicate at a polygon vertex.

use nalgebra::Point2;

/// True iff the directed segment `v0→v1` points into the polygon interior
/// at vertex `v0`, whose boundary neighbors are `prev` and `next`.
///
/// Assumes the polygon winds clockwise in the working frame. `prev`, `v0`
/// and `next` must not be collinear (debug-asserted).
pub fn segment_in_cone(
    v0: Point2<f64>,
    v1: Point2<f64>,
    prev: Point2<f64>,
    next: Point2<f64>,
) -> bool {
    let diff = v1 - v0;
    let edge_l = prev - v0;
    let edge_r = next - v0;

    debug_assert!(
        edge_r.perp(&edge_l) != 0.0,
        "cone neighbors are collinear at {v0:?}"
    );

    if edge_r.perp(&edge_l) < 0.0 {
        // Convex vertex: the segment must lie between both edges.
        diff.perp(&edge_r) > 0.0 && diff.perp(&edge_l) < 0.0
    } else {
        // Reflex vertex: the complement cone is excluded instead.
        diff.perp(&edge_r) > 0.0 || diff.perp(&edge_l) < 0.0
    }
}
