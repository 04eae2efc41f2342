// SPDX-License-Identifier: LGPL-3.0-or-later

//! Biquad coefficient calculation using the RBJ Audio EQ Cookbook.
//!
//! All normalized coefficients follow the [`BiquadCoeffs`] convention where
//! `a1` and `a2` are **pre-negated** relative to the cookbook formulas, so
//! the five exported taps read directly as difference-equation weights:
//!
//! ```text
//!   y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] + a1*y[n-1] + a2*y[n-2]
//! ```

use biquad_dsp_lib::types::BiquadCoeffs;
use tracing::{debug, trace};

use crate::consts::LN_2_HALF;
use crate::error::DesignResult;
use crate::units::{db_to_gain, hz_to_omega};

use super::params::{DesignParameters, ShapeSelector};

/// Supported biquad filter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FilterType {
    /// Second-order low-pass filter.
    LowPass,
    /// Second-order high-pass filter.
    HighPass,
    /// Band-pass with constant skirt gain (peak gain = Q).
    BandPass,
    /// Notch (band-reject) filter.
    Notch,
    /// All-pass filter (phase shift only).
    AllPass,
    /// Peaking (bell/parametric) equalizer.
    Peaking,
    /// Low-shelf equalizer.
    LowShelf,
    /// High-shelf equalizer.
    HighShelf,
    /// Flat gain of `gain_db`, no poles or zeros.
    UnityGain,
}

impl FilterType {
    /// Every variant, in declaration order.
    pub const ALL: [FilterType; 9] = [
        FilterType::LowPass,
        FilterType::HighPass,
        FilterType::BandPass,
        FilterType::Notch,
        FilterType::AllPass,
        FilterType::Peaking,
        FilterType::LowShelf,
        FilterType::HighShelf,
        FilterType::UnityGain,
    ];

    /// Returns `true` for the two shelving types.
    #[inline]
    pub fn is_shelf(self) -> bool {
        matches!(self, FilterType::LowShelf | FilterType::HighShelf)
    }

    /// Returns `true` for types whose gain is split between numerator and
    /// denominator, i.e. whose linear factor is `10^(gain/40)`.
    #[inline]
    pub fn splits_gain(self) -> bool {
        matches!(
            self,
            FilterType::Peaking | FilterType::LowShelf | FilterType::HighShelf
        )
    }
}

/// Un-normalized transfer function taps straight from the cookbook table.
///
/// `H(z) = (b0 + b1*z^-1 + b2*z^-2) / (a0 + a1*z^-1 + a2*z^-2)` with the
/// cookbook's sign convention (feedback taps **not** negated).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTaps {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl RawTaps {
    /// Divide through by `a0` and negate the feedback taps.
    pub fn normalize(&self) -> BiquadCoeffs {
        BiquadCoeffs {
            b0: self.b0 / self.a0,
            b1: self.b1 / self.a0,
            b2: self.b2 / self.a0,
            a1: -self.a1 / self.a0,
            a2: -self.a2 / self.a0,
        }
    }

    /// `H(1) = (b0 + b1 + b2) / (a0 + a1 + a2)`.
    pub fn dc_gain(&self) -> f64 {
        (self.b0 + self.b1 + self.b2) / (self.a0 + self.a1 + self.a2)
    }
}

/// Result of a design: normalized taps plus the stability verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedCoefficients {
    pub coeffs: BiquadCoeffs,
    pub is_stable: bool,
}

impl Default for NormalizedCoefficients {
    /// All-zero taps, not stable: nothing has been designed.
    fn default() -> Self {
        Self {
            coeffs: BiquadCoeffs::default(),
            is_stable: false,
        }
    }
}

/// Linear gain factor `d` used by the cookbook formulas.
///
/// `10^(gain_db/40)` for Peaking and the shelves, `10^(gain_db/20)`
/// otherwise.
#[inline]
pub fn linear_gain(filter_type: FilterType, gain_db: f64) -> f64 {
    if filter_type.splits_gain() {
        db_to_gain(gain_db / 2.0)
    } else {
        db_to_gain(gain_db)
    }
}

/// Compute the cookbook's intermediate `alpha`.
///
/// # Parameters
///
/// - `filter_type` -- selects between slope and bandwidth forms
/// - `shape` -- how `bandwidth` is interpreted
/// - `bandwidth` -- Q, bandwidth in octaves, or shelf slope `S`
/// - `omega` -- normalized angular frequency `2*pi*f/fs`
/// - `d` -- linear gain factor from [`linear_gain`]
pub fn calc_alpha(
    filter_type: FilterType,
    shape: ShapeSelector,
    bandwidth: f64,
    omega: f64,
    d: f64,
) -> f64 {
    let sn = omega.sin();
    match shape {
        ShapeSelector::Q => sn / (2.0 * bandwidth),
        ShapeSelector::BandwidthOrSlope if filter_type.is_shelf() => {
            sn / 2.0 * ((d + 1.0 / d) * (1.0 / bandwidth - 1.0) + 2.0).sqrt()
        }
        ShapeSelector::BandwidthOrSlope => sn * (LN_2_HALF * bandwidth * omega / sn).sinh(),
    }
}

/// Evaluate the cookbook table for `params`.
///
/// No validation is performed; degenerate inputs yield non-finite taps.
pub fn calc_raw_taps(params: &DesignParameters) -> RawTaps {
    let d = linear_gain(params.filter_type, params.gain_db);
    let omega = hz_to_omega(params.sample_rate, params.center_freq);
    let cs = omega.cos();
    let alpha = calc_alpha(params.filter_type, params.shape, params.bandwidth, omega, d);
    let beta = 2.0 * d.sqrt() * alpha;

    let (b0, b1, b2, a0, a1, a2) = match params.filter_type {
        FilterType::LowPass => {
            let b1 = 1.0 - cs;
            let b0 = b1 / 2.0;
            (b0, b1, b0, 1.0 + alpha, -2.0 * cs, 1.0 - alpha)
        }

        FilterType::HighPass => {
            let b0 = (1.0 + cs) / 2.0;
            (b0, -(1.0 + cs), b0, 1.0 + alpha, -2.0 * cs, 1.0 - alpha)
        }

        FilterType::BandPass => (alpha, 0.0, -alpha, 1.0 + alpha, -2.0 * cs, 1.0 - alpha),

        FilterType::Notch => (1.0, -2.0 * cs, 1.0, 1.0 + alpha, -2.0 * cs, 1.0 - alpha),

        FilterType::AllPass => (
            1.0 - alpha,
            -2.0 * cs,
            1.0 + alpha,
            1.0 + alpha,
            -2.0 * cs,
            1.0 - alpha,
        ),

        FilterType::Peaking => (
            1.0 + alpha * d,
            -2.0 * cs,
            1.0 - alpha * d,
            1.0 + alpha / d,
            -2.0 * cs,
            1.0 - alpha / d,
        ),

        FilterType::LowShelf => {
            let d_plus_1 = d + 1.0;
            let d_minus_1 = d - 1.0;
            (
                d * (d_plus_1 - d_minus_1 * cs + beta),
                2.0 * d * (d_minus_1 - d_plus_1 * cs),
                d * (d_plus_1 - d_minus_1 * cs - beta),
                d_plus_1 + d_minus_1 * cs + beta,
                -2.0 * (d_minus_1 + d_plus_1 * cs),
                d_plus_1 + d_minus_1 * cs - beta,
            )
        }

        FilterType::HighShelf => {
            let d_plus_1 = d + 1.0;
            let d_minus_1 = d - 1.0;
            (
                d * (d_plus_1 + d_minus_1 * cs + beta),
                -2.0 * d * (d_minus_1 + d_plus_1 * cs),
                d * (d_plus_1 + d_minus_1 * cs - beta),
                d_plus_1 - d_minus_1 * cs + beta,
                2.0 * (d_minus_1 - d_plus_1 * cs),
                d_plus_1 - d_minus_1 * cs - beta,
            )
        }

        FilterType::UnityGain => (d, 0.0, 0.0, 1.0, 0.0, 0.0),
    };

    RawTaps {
        b0,
        b1,
        b2,
        a0,
        a1,
        a2,
    }
}

/// Magnitude of the largest root of the normalized denominator.
///
/// The denominator `1 - a1*z^-1 - a2*z^-2` has characteristic polynomial
/// `z^2 + p1*z + p2` with `p1 = -a1`, `p2 = -a2`. Real roots are used
/// directly when the discriminant is non-negative, otherwise the modulus
/// of the complex-conjugate pair. Non-finite taps yield NaN or infinity.
///
/// This is the exact root modulus of the monic denominator. Stability
/// flags can differ from tools that take a single root of the raw
/// `A1^2 - 4*A0*A2` discriminant.
pub fn dominant_pole_radius(c: &BiquadCoeffs) -> f64 {
    let p1 = -c.a1;
    let p2 = -c.a2;
    let disc = p1 * p1 - 4.0 * p2;

    if disc >= 0.0 {
        let root = disc.sqrt();
        let r1 = (-p1 - root) / 2.0;
        let r2 = (-p1 + root) / 2.0;
        r1.abs().max(r2.abs())
    } else {
        let re = -p1 / 2.0;
        let im = (-disc).sqrt() / 2.0;
        re.hypot(im)
    }
}

/// A section is stable iff every pole lies strictly inside the unit circle.
#[inline]
pub fn is_stable(c: &BiquadCoeffs) -> bool {
    dominant_pole_radius(c) < 1.0
}

/// Design a biquad: normalized taps plus stability flag.
///
/// No validation is performed; see [`DesignParameters::validate`].
pub fn calc_biquad_coeffs(params: &DesignParameters) -> NormalizedCoefficients {
    let coeffs = calc_raw_taps(params).normalize();
    let is_stable = is_stable(&coeffs);
    trace!(
        filter_type = ?params.filter_type,
        b0 = coeffs.b0,
        b1 = coeffs.b1,
        b2 = coeffs.b2,
        a1 = coeffs.a1,
        a2 = coeffs.a2,
        is_stable,
        "biquad designed"
    );
    NormalizedCoefficients { coeffs, is_stable }
}

/// Validated export: the five normalized taps `[b0, b1, b2, a1, a2]`.
///
/// # Errors
///
/// [`DesignError`](crate::DesignError) when the center frequency or
/// sample rate is not above `f64::EPSILON`.
pub fn try_export_coefficients(params: &DesignParameters) -> DesignResult<[f64; 5]> {
    params.validate()?;
    Ok(calc_raw_taps(params).normalize().to_array())
}

/// Stateless export of the five normalized taps `[b0, b1, b2, a1, a2]`.
///
/// Returns an **empty** vector when the center frequency or sample rate
/// is not above `f64::EPSILON`; callers must check for emptiness.
pub fn export_coefficients(params: &DesignParameters) -> Vec<f64> {
    match try_export_coefficients(params) {
        Ok(taps) => taps.to_vec(),
        Err(e) => {
            debug!(error = %e, "coefficient export rejected");
            Vec::new()
        }
    }
}
