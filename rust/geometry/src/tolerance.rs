// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric tolerances for geometric predicates.
//!
//! Every predicate takes an explicit relative epsilon so callers can tune it
//! for their mesh units and tests can probe behavior at varying precision.
//! [`DEFAULT_EPSILON`] is the conventional value.

/// Default relative tolerance for parallelism and degeneracy tests.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// True if `x` is within `eps` of zero.
#[inline]
pub fn near_zero(x: f64, eps: f64) -> bool {
    x.abs() <= eps
}

/// Clamp to `[-1, 1]`. Dot products of unit vectors can drift just outside
/// the interval, which would make `acos` return NaN.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}
