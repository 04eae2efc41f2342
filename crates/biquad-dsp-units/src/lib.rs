// SPDX-License-Identifier: LGPL-3.0-or-later

//! # biquad-dsp-units
//!
//! Second-order IIR ("biquad") design and analysis, built on top of
//! [`biquad_dsp_lib`]. It includes:
//!
//! - **Design**: the nine RBJ Audio EQ Cookbook topologies plus a plain
//!   gain stage, parameterised by Q, bandwidth in octaves or shelf slope
//! - **Stability**: analytic pole-radius check of every design
//! - **Analysis**: magnitude in dB and group delay in samples at any
//!   frequency, for one section or a bank of independent sections
//!
//! Coefficients are never applied to audio here; a host takes the
//! exported taps and runs its own processing loop.
//!
//! ## Logging
//!
//! Rejected and unstable designs are reported through `tracing` at
//! `debug` level, computed taps at `trace` level. No subscriber is
//! installed by the library.

pub mod consts;
pub mod error;
pub mod filters;
pub mod units;

pub use error::{DesignError, DesignResult};
