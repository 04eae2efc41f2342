// SPDX-License-Identifier: LGPL-3.0-or-later

//! Design constants.

/// Smallest accepted center frequency and sample rate, in Hz.
///
/// Anything at or below this is treated as "no design requested".
pub const MIN_FREQUENCY: f64 = f64::EPSILON;

/// `ln(2) / 2`, the octave-to-natural-log factor of the bandwidth form of alpha.
pub const LN_2_HALF: f64 = std::f64::consts::LN_2 / 2.0;

/// Q of a second-order Butterworth response (`1/sqrt(2)`).
pub const BUTTERWORTH_Q: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Default sample rate for a freshly constructed filter (Hz).
pub const DEFAULT_SAMPLE_RATE: f64 = 48000.0;

/// Default center frequency for a freshly constructed filter (Hz).
pub const DEFAULT_FREQUENCY: f64 = 1000.0;
