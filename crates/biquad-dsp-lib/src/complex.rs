// SPDX-License-Identifier: LGPL-3.0-or-later

//! Complex helpers for evaluating polynomials on the unit circle.
//!
//! Thin wrappers over [`Complex64`]. The rotation direction matters:
//! [`unit_circle`] walks the circle **clockwise**, returning
//! `cos(w) - j*sin(w)`, and the phase-sensitive code in
//! [`crate::response`] depends on that sign.

use num_complex::Complex64;

/// Point on the unit circle at angle `-w`: `cos(w) - j*sin(w)`.
#[inline]
pub fn unit_circle(w: f64) -> Complex64 {
    Complex64::new(w.cos(), -w.sin())
}

/// Evaluate `c0 + c1*z + c2*z2` where `z2` is the precomputed square of `z`.
#[inline]
pub fn quadratic(c0: f64, c1: f64, c2: f64, z: Complex64, z2: Complex64) -> Complex64 {
    Complex64::from(c0) + z * c1 + z2 * c2
}

/// Complex division that refuses near-zero divisors.
///
/// Returns `None` when `|den| < f64::EPSILON`.
#[inline]
pub fn checked_div(num: Complex64, den: Complex64) -> Option<Complex64> {
    if den.norm() < f64::EPSILON {
        None
    } else {
        Some(num / den)
    }
}
