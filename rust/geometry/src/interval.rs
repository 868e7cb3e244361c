// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 1D interval overlap.

use smallvec::SmallVec;

/// Scalars where the closed intervals `[u0, u1]` and `[v0, v1]` meet.
///
/// Returns no scalars when the intervals are disjoint, a single scalar when
/// they touch at a boundary, and the overlap's two endpoints otherwise.
///
/// # Panics
///
/// Panics unless `u0 < u1` and `v0 < v1`. A violation is a caller bug, not
/// bad input data.
pub fn interval_overlap(u0: f64, u1: f64, v0: f64, v1: f64) -> SmallVec<[f64; 2]> {
    assert!(
        u0 < u1 && v0 < v1,
        "intervals must be ordered: [{u0}, {u1}] vs [{v0}, {v1}]"
    );

    let mut result = SmallVec::new();
    if u1 < v0 || u0 > v1 {
        return result;
    }

    if u1 > v0 {
        if u0 < v1 {
            result.push(u0.max(v0));
            result.push(u1.min(v1));
        } else {
            // u0 == v1
            result.push(u0);
        }
    } else {
        // u1 == v0
        result.push(u1);
    }
    result
}
