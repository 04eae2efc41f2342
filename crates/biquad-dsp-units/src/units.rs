// SPDX-License-Identifier: LGPL-3.0-or-later

//! Unit conversion functions.

/// Convert decibels to linear gain (amplitude ratio).
///
/// # Arguments
/// * `db` - Level in decibels
///
/// # Returns
/// `10^(db/20)`
#[inline]
pub fn db_to_gain(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert linear gain (amplitude ratio) to decibels.
///
/// # Arguments
/// * `gain` - Linear gain (amplitude ratio)
///
/// # Returns
/// Level in decibels
#[inline]
pub fn gain_to_db(gain: f64) -> f64 {
    20.0 * gain.log10()
}

/// Convert a frequency to radians per sample: `2*pi*freq/sr`.
#[inline]
pub fn hz_to_omega(sr: f64, freq: f64) -> f64 {
    2.0 * std::f64::consts::PI * freq / sr
}
