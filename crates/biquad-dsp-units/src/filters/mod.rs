// SPDX-License-Identifier: LGPL-3.0-or-later

//! Biquad coefficient design and analysis wrappers.
//!
//! Coefficients follow the RBJ Audio EQ Cookbook, normalized by `a0` and
//! stored in the biquad-dsp-lib pre-negated a1/a2 convention.

pub mod bank;
pub mod coeffs;
pub mod filter;
pub mod params;
