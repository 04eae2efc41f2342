// SPDX-License-Identifier: LGPL-3.0-or-later

//! Core data types shared by the designer and the response kernels.

/// Coefficients for a single biquad section, normalized by `a0`.
///
/// The feedback taps are stored **pre-negated**, so the section
/// implements the difference equation:
/// ```text
///   y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] + a1*y[n-1] + a2*y[n-2]
/// ```
///
/// i.e. `a1 = -A1/A0` and `a2 = -A2/A0` relative to the cookbook's
/// denominator `A0 + A1*z^-1 + A2*z^-2`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoeffs {
    /// Pass-through section: `H(z) = 1`.
    pub const IDENTITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Taps in export order: `[b0, b1, b2, a1, a2]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 5] {
        [self.b0, self.b1, self.b2, self.a1, self.a2]
    }

    /// Build from export-ordered taps `[b0, b1, b2, a1, a2]`.
    #[inline]
    pub fn from_array(taps: [f64; 5]) -> Self {
        let [b0, b1, b2, a1, a2] = taps;
        Self { b0, b1, b2, a1, a2 }
    }

    /// Returns `true` if every tap is finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

impl From<[f64; 5]> for BiquadCoeffs {
    fn from(taps: [f64; 5]) -> Self {
        Self::from_array(taps)
    }
}

impl From<BiquadCoeffs> for [f64; 5] {
    fn from(c: BiquadCoeffs) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let c = BiquadCoeffs::default();
        assert_eq!(c.to_array(), [0.0; 5]);
    }

    #[test]
    fn array_order_is_b_then_a() {
        let c = BiquadCoeffs::from_array([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(c.b0, 1.0);
        assert_eq!(c.b2, 3.0);
        assert_eq!(c.a1, 4.0);
        assert_eq!(c.a2, 5.0);
        let back: [f64; 5] = c.into();
        assert_eq!(back, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn finite_check_catches_nan() {
        assert!(BiquadCoeffs::IDENTITY.is_finite());
        let c = BiquadCoeffs {
            a2: f64::NAN,
            ..BiquadCoeffs::IDENTITY
        };
        assert!(!c.is_finite());
    }
}
