// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robust 2D segment-segment intersection.
//!
//! Handles the degenerate parallel and collinear cases explicitly: two
//! segments can meet in zero points, one point (a proper crossing or a
//! touch), or two points (the endpoints of a collinear overlap).

use nalgebra::Point2;
use smallvec::SmallVec;

use crate::interval::interval_overlap;

/// Points where segment `s1p1→s1p2` meets segment `s2p1→s2p2`.
///
/// `eps` is the relative tolerance for the parallelism tests. Both segments
/// must have nonzero length.
pub fn intersect_segments(
    s1p1: Point2<f64>,
    s1p2: Point2<f64>,
    s2p1: Point2<f64>,
    s2p2: Point2<f64>,
    eps: f64,
) -> SmallVec<[Point2<f64>; 2]> {
    let d0 = s1p2 - s1p1;
    let d1 = s2p2 - s2p1;
    let e = s2p1 - s1p1;

    let mut result = SmallVec::new();

    let kross = d0.perp(&d1);
    let sqr_len0 = d0.norm_squared();
    let sqr_len1 = d1.norm_squared();

    if kross * kross > eps * sqr_len0 * sqr_len1 {
        // Lines are not parallel: a single candidate point, which must lie
        // inside both parameter ranges to be on the segments.
        let s = e.perp(&d1) / kross;
        if !(0.0..=1.0).contains(&s) {
            return result;
        }
        let t = e.perp(&d0) / kross;
        if !(0.0..=1.0).contains(&t) {
            return result;
        }
        result.push(s1p1 + d0 * s);
        return result;
    }

    // Parallel lines are distinct unless s2p1 sits on segment 1's line.
    let sqr_len_e = e.norm_squared();
    let kross = e.perp(&d0);
    if kross * kross > eps * sqr_len0 * sqr_len_e {
        return result;
    }

    // Collinear: overlap both segments as parameter intervals along d0.
    let s0 = d0.dot(&e) / sqr_len0;
    let s1 = s0 + d0.dot(&d1) / sqr_len0;
    let (s_min, s_max) = if s0 < s1 { (s0, s1) } else { (s1, s0) };
    for param in interval_overlap(0.0, 1.0, s_min, s_max) {
        result.push(s1p1 + d0 * param);
    }
    result
}

/// True iff segment `s1p1→s1p2` meets segment `s2p1→s2p2`.
///
/// Same decision logic as [`intersect_segments`] without materializing the
/// points; used in the inner loop of the diagonal test.
pub fn segments_intersect(
    s1p1: Point2<f64>,
    s1p2: Point2<f64>,
    s2p1: Point2<f64>,
    s2p2: Point2<f64>,
    eps: f64,
) -> bool {
    let d0 = s1p2 - s1p1;
    let d1 = s2p2 - s2p1;
    let e = s2p1 - s1p1;

    let kross = d0.perp(&d1);
    let sqr_len0 = d0.norm_squared();
    let sqr_len1 = d1.norm_squared();

    if kross * kross > eps * sqr_len0 * sqr_len1 {
        let s = e.perp(&d1) / kross;
        if !(0.0..=1.0).contains(&s) {
            return false;
        }
        let t = e.perp(&d0) / kross;
        return (0.0..=1.0).contains(&t);
    }

    let sqr_len_e = e.norm_squared();
    let kross = e.perp(&d0);
    if kross * kross > eps * sqr_len0 * sqr_len_e {
        return false;
    }

    let s0 = d0.dot(&e) / sqr_len0;
    let s1 = s0 + d0.dot(&d1) / sqr_len0;
    let (s_min, s_max) = if s0 < s1 { (s0, s1) } else { (s1, s0) };
    !interval_overlap(0.0, 1.0, s_min, s_max).is_empty()
}
