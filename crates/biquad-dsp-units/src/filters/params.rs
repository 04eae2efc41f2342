// SPDX-License-Identifier: LGPL-3.0-or-later

//! Design parameters for a single biquad section.

use crate::consts::{BUTTERWORTH_Q, DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE, MIN_FREQUENCY};
use crate::error::{DesignError, DesignResult};

use super::coeffs::FilterType;

/// How [`DesignParameters::bandwidth`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeSelector {
    /// Quality factor.
    #[default]
    Q,
    /// Shelf slope `S` for [`FilterType::LowShelf`] / [`FilterType::HighShelf`],
    /// bandwidth in octaves for every other type.
    BandwidthOrSlope,
}

/// Everything needed to design one biquad.
///
/// Construct with [`DesignParameters::new`] or start from
/// [`Default`] and chain the `with_*` methods:
///
/// ```
/// use biquad_dsp_units::filters::coeffs::FilterType;
/// use biquad_dsp_units::filters::params::DesignParameters;
///
/// let p = DesignParameters::default()
///     .with_filter_type(FilterType::Peaking)
///     .with_frequency(2500.0)
///     .with_gain(-4.5)
///     .with_bandwidth(1.0);
/// assert!(p.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DesignParameters {
    /// Filter topology.
    pub filter_type: FilterType,
    /// Gain in dB. Ignored by the pass/stop/all-pass types.
    pub gain_db: f64,
    /// Center or cutoff frequency in Hz.
    pub center_freq: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Q, bandwidth in octaves, or shelf slope, according to `shape`.
    pub bandwidth: f64,
    /// Interpretation of `bandwidth`.
    pub shape: ShapeSelector,
}

impl Default for DesignParameters {
    /// Butterworth low-pass at 1 kHz, 48 kHz sample rate, 0 dB.
    fn default() -> Self {
        Self {
            filter_type: FilterType::LowPass,
            gain_db: 0.0,
            center_freq: DEFAULT_FREQUENCY,
            sample_rate: DEFAULT_SAMPLE_RATE,
            bandwidth: BUTTERWORTH_Q,
            shape: ShapeSelector::Q,
        }
    }
}

impl DesignParameters {
    /// Create a parameter set from all six design inputs.
    pub fn new(
        filter_type: FilterType,
        gain_db: f64,
        center_freq: f64,
        sample_rate: f64,
        bandwidth: f64,
        shape: ShapeSelector,
    ) -> Self {
        Self {
            filter_type,
            gain_db,
            center_freq,
            sample_rate,
            bandwidth,
            shape,
        }
    }

    pub fn with_filter_type(mut self, filter_type: FilterType) -> Self {
        self.filter_type = filter_type;
        self
    }

    pub fn with_gain(mut self, gain_db: f64) -> Self {
        self.gain_db = gain_db;
        self
    }

    pub fn with_frequency(mut self, center_freq: f64) -> Self {
        self.center_freq = center_freq;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Use `q` as the quality factor.
    pub fn with_q(mut self, q: f64) -> Self {
        self.bandwidth = q;
        self.shape = ShapeSelector::Q;
        self
    }

    /// Use `octaves` as the bandwidth (non-shelf types).
    pub fn with_bandwidth(mut self, octaves: f64) -> Self {
        self.bandwidth = octaves;
        self.shape = ShapeSelector::BandwidthOrSlope;
        self
    }

    /// Use `slope` as the shelf slope `S` (shelf types).
    ///
    /// Same storage as [`with_bandwidth`](Self::with_bandwidth); the
    /// filter type decides the interpretation.
    pub fn with_slope(self, slope: f64) -> Self {
        self.with_bandwidth(slope)
    }

    /// Check that a design can be attempted.
    ///
    /// Both the center frequency and the sample rate must exceed
    /// `f64::EPSILON`; NaN is rejected as well. No other parameter is
    /// checked: a non-positive Q or an extreme gain propagates through
    /// the formulas and shows up as non-finite taps or an unstable design.
    pub fn validate(&self) -> DesignResult<()> {
        if self.center_freq.is_nan() || self.center_freq <= MIN_FREQUENCY {
            return Err(DesignError::InvalidCenterFrequency(self.center_freq));
        }
        if self.sample_rate.is_nan() || self.sample_rate <= MIN_FREQUENCY {
            return Err(DesignError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }
}
