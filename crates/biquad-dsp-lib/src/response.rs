// SPDX-License-Identifier: LGPL-3.0-or-later

//! Frequency-domain evaluation of a single biquad section.
//!
//! The analysis angle is `w = pi * freq / (sample_rate / 2)` and the
//! transfer function is evaluated at `z = cos(w) - j*sin(w)`:
//! ```text
//!   H = (b0 + b1*z + b2*z^2) / (1 - a1*z - a2*z^2)
//! ```
//! with `a1`/`a2` pre-negated (see [`BiquadCoeffs`]).
//!
//! The group delay uses the closed-form Shpak expression for one
//! second-order (or degenerate first-order) section. It is **not** valid
//! for a composite higher-order transfer function; a cascade must be
//! analysed section by section and the delays summed.

use multiversion::multiversion;

use crate::complex::{checked_div, quadratic, unit_circle};
use crate::types::BiquadCoeffs;

/// Normalized angular frequency in radians per sample.
#[inline]
pub fn analysis_angle(freq: f64, sample_rate: f64) -> f64 {
    std::f64::consts::PI * freq / (sample_rate * 0.5)
}

/// Magnitude response in dB at `freq` Hz.
///
/// Returns `0.0` when the denominator's modulus falls below
/// `f64::EPSILON`. Otherwise `20*log10(sqrt(|H|^2 + eps))`, where the
/// epsilon floors the result for a numerator zero on the unit circle.
pub fn gain_db(c: &BiquadCoeffs, freq: f64, sample_rate: f64) -> f64 {
    let z = unit_circle(analysis_angle(freq, sample_rate));
    let z2 = z * z;

    let num = quadratic(c.b0, c.b1, c.b2, z, z2);
    let den = quadratic(1.0, -c.a1, -c.a2, z, z2);

    match checked_div(num, den) {
        Some(h) => 20.0 * (h.norm_sqr() + f64::EPSILON).sqrt().log10(),
        None => 0.0,
    }
}

/// Group delay in samples at `freq` Hz.
///
/// `delay(numerator) - delay(denominator)`, each from the Shpak identity.
/// A pass-through section yields zero at every frequency. The result is
/// undefined (NaN or infinite) exactly at a zero or pole on the unit
/// circle.
pub fn group_delay(c: &BiquadCoeffs, freq: f64, sample_rate: f64) -> f64 {
    let w = analysis_angle(freq, sample_rate);
    let trig = Trig::new(w);

    let num = section_delay(c.b0, c.b1, c.b2, &trig);
    let den = section_delay(1.0, -c.a1, -c.a2, &trig);
    num - den
}

struct Trig {
    cw: f64,
    cw2: f64,
    sw: f64,
    sw2: f64,
}

impl Trig {
    #[inline]
    fn new(w: f64) -> Self {
        Self {
            cw: w.cos(),
            cw2: (2.0 * w).cos(),
            sw: w.sin(),
            sw2: (2.0 * w).sin(),
        }
    }
}

/// Group delay of `p0 + p1*z^-1 + p2*z^-2` on the unit circle.
///
/// Multiplying through by `z^2` gives `v + j*u`, whose phase derivative
/// is `(v*du - u*dv) / (u^2 + v^2)`; the `z^-2` factor contributes the
/// constant 2.
#[inline]
fn section_delay(p0: f64, p1: f64, p2: f64, t: &Trig) -> f64 {
    let u = p0 * t.sw2 + p1 * t.sw;
    let v = p0 * t.cw2 + p1 * t.cw + p2;
    let du = 2.0 * p0 * t.cw2 + p1 * t.cw;
    let dv = -(2.0 * p0 * t.sw2 + p1 * t.sw);
    let u2v2 = p0 * p0
        + p1 * p1
        + p2 * p2
        + 2.0 * (p0 * p1 + p1 * p2) * t.cw
        + 2.0 * (p0 * p2) * t.cw2;
    2.0 - (v * du - u * dv) / u2v2
}

/// Fill `dst` with [`gain_db`] for each frequency in `freqs`.
///
/// Processes `min(dst.len(), freqs.len())` points.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn gain_curve(dst: &mut [f64], freqs: &[f64], c: &BiquadCoeffs, sample_rate: f64) {
    for (out, &f) in dst.iter_mut().zip(freqs.iter()) {
        *out = gain_db(c, f, sample_rate);
    }
}

/// Fill `dst` with [`group_delay`] for each frequency in `freqs`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn group_delay_curve(dst: &mut [f64], freqs: &[f64], c: &BiquadCoeffs, sample_rate: f64) {
    for (out, &f) in dst.iter_mut().zip(freqs.iter()) {
        *out = group_delay(c, f, sample_rate);
    }
}

/// Fill `dst` with logarithmically spaced frequencies from `f_min` to `f_max`.
///
/// Both ends are included. A single-element `dst` receives `f_min`.
pub fn log_frequencies(dst: &mut [f64], f_min: f64, f_max: f64) {
    let n = dst.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        dst[0] = f_min;
        return;
    }
    let ratio = (f_max / f_min).ln() / (n - 1) as f64;
    for (i, out) in dst.iter_mut().enumerate() {
        *out = f_min * (ratio * i as f64).exp();
    }
    dst[n - 1] = f_max;
}
