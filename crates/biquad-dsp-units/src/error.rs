// SPDX-License-Identifier: LGPL-3.0-or-later

//! Design parameter errors.

use thiserror::Error;

/// Result type for validated design operations.
pub type DesignResult<T> = Result<T, DesignError>;

/// Reasons a set of design parameters cannot produce coefficients.
///
/// The plain design entry points never surface these; they return an
/// empty export or keep the previous coefficients instead. The error is
/// available from [`DesignParameters::validate`](crate::filters::params::DesignParameters::validate)
/// and [`try_export_coefficients`](crate::filters::coeffs::try_export_coefficients).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DesignError {
    /// Center frequency at or below machine epsilon (or NaN).
    #[error("center frequency must be positive, got {0} Hz")]
    InvalidCenterFrequency(f64),

    /// Sample rate at or below machine epsilon (or NaN).
    #[error("sample rate must be positive, got {0} Hz")]
    InvalidSampleRate(f64),
}
