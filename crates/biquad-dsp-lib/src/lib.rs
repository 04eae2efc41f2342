// SPDX-License-Identifier: LGPL-3.0-or-later

//! # biquad-dsp-lib
//!
//! Low-level primitives for analysing a single second-order IIR section.
//!
//! This crate provides the building blocks used by `biquad-dsp-units`
//! to design and inspect biquad filters. It includes:
//!
//! - **Types**: the normalized five-tap coefficient set
//! - **Complex arithmetic**: unit-circle points and polynomial evaluation
//!   on top of [`num_complex::Complex64`]
//! - **Response**: magnitude in dB and group delay in samples, both for a
//!   single frequency and for whole frequency axes
//!
//! ## Design
//!
//! Everything is double precision. The curve kernels use runtime SIMD
//! dispatch via the `multiversion` crate, compiled for AVX2+FMA, AVX,
//! SSE4.1 and NEON; the best variant is selected automatically.
//!
//! No sample-processing loop lives here: coefficients are only ever
//! evaluated in the frequency domain.

pub mod complex;
pub mod response;
pub mod types;
