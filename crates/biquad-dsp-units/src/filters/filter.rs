// SPDX-License-Identifier: LGPL-3.0-or-later

//! Stateful biquad with parameter management and response evaluation.
//!
//! Retains the most recent accepted design and answers stability,
//! magnitude and group-delay queries against it.

use biquad_dsp_lib::response;
use biquad_dsp_lib::types::BiquadCoeffs;
use tracing::debug;

use super::coeffs::{FilterType, NormalizedCoefficients, calc_biquad_coeffs, export_coefficients};
use super::params::{DesignParameters, ShapeSelector};

/// A single biquad section holding its current design.
///
/// Parameters can be supplied all at once via [`design`](Biquad::design),
/// or piecewise with the builder setters followed by
/// [`update_settings`](Biquad::update_settings).
///
/// # Examples
///
/// ```
/// use biquad_dsp_units::filters::coeffs::FilterType;
/// use biquad_dsp_units::filters::filter::Biquad;
///
/// let mut filt = Biquad::new();
/// filt.set_sample_rate(48000.0)
///     .set_filter_type(FilterType::Peaking)
///     .set_frequency(1000.0)
///     .set_q(1.0)
///     .set_gain(6.0)
///     .update_settings();
///
/// assert!(filt.is_stable());
/// assert!((filt.gain_at(1000.0, 48000.0) - 6.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Biquad {
    params: DesignParameters,
    designed: Option<DesignParameters>,
    state: NormalizedCoefficients,
    dirty: bool,
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}

impl Biquad {
    /// Create an undesigned filter.
    ///
    /// Coefficients start at zero and [`is_stable`](Biquad::is_stable)
    /// reports `false` until the first accepted design. Pending parameters
    /// start at [`DesignParameters::default`].
    pub fn new() -> Self {
        Self {
            params: DesignParameters::default(),
            designed: None,
            state: NormalizedCoefficients::default(),
            dirty: true,
        }
    }

    /// Create a filter already designed from `params`.
    ///
    /// Invalid parameters yield an undesigned filter, as with
    /// [`design`](Biquad::design) on a fresh instance.
    pub fn designed(params: DesignParameters) -> Self {
        let mut filt = Self::new();
        filt.design(params);
        filt
    }

    /// Recalculate and replace the retained coefficients.
    ///
    /// If the center frequency or sample rate is not above
    /// `f64::EPSILON`, nothing changes: previous coefficients, stability
    /// flag and last-used parameters are all kept.
    pub fn design(&mut self, params: DesignParameters) {
        if let Err(e) = params.validate() {
            debug!(error = %e, "design rejected, keeping previous coefficients");
            return;
        }

        let state = calc_biquad_coeffs(&params);
        if !state.is_stable {
            debug!(
                filter_type = ?params.filter_type,
                center_freq = params.center_freq,
                sample_rate = params.sample_rate,
                bandwidth = params.bandwidth,
                "designed filter is unstable"
            );
        }

        self.state = state;
        self.params = params;
        self.designed = Some(params);
        self.dirty = false;
    }

    /// Set the sample rate in Hz.
    pub fn set_sample_rate(&mut self, sr: f64) -> &mut Self {
        self.params.sample_rate = sr;
        self.dirty = true;
        self
    }

    /// Set the filter type.
    pub fn set_filter_type(&mut self, ft: FilterType) -> &mut Self {
        self.params.filter_type = ft;
        self.dirty = true;
        self
    }

    /// Set the center/cutoff frequency in Hz.
    pub fn set_frequency(&mut self, freq: f64) -> &mut Self {
        self.params.center_freq = freq;
        self.dirty = true;
        self
    }

    /// Set the quality factor.
    pub fn set_q(&mut self, q: f64) -> &mut Self {
        self.params = self.params.with_q(q);
        self.dirty = true;
        self
    }

    /// Set the bandwidth in octaves, or the slope for shelf types.
    pub fn set_bandwidth(&mut self, bw: f64) -> &mut Self {
        self.params = self.params.with_bandwidth(bw);
        self.dirty = true;
        self
    }

    /// Set how the bandwidth value is interpreted.
    pub fn set_shape(&mut self, shape: ShapeSelector) -> &mut Self {
        self.params.shape = shape;
        self.dirty = true;
        self
    }

    /// Set the gain in dB.
    pub fn set_gain(&mut self, gain_db: f64) -> &mut Self {
        self.params.gain_db = gain_db;
        self.dirty = true;
        self
    }

    /// Design from the pending parameters if any setter was called.
    pub fn update_settings(&mut self) {
        if !self.dirty {
            return;
        }
        self.design(self.params);
        self.dirty = false;
    }

    /// Pending parameters (what the next [`update_settings`](Biquad::update_settings) will use).
    pub fn params(&self) -> &DesignParameters {
        &self.params
    }

    /// Parameters of the current design, if any was accepted.
    pub fn designed_params(&self) -> Option<&DesignParameters> {
        self.designed.as_ref()
    }

    /// Returns `true` if setters were called since the last design.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Retained coefficients and stability flag.
    pub fn coefficients(&self) -> NormalizedCoefficients {
        self.state
    }

    /// Retained taps only.
    pub fn taps(&self) -> &BiquadCoeffs {
        &self.state.coeffs
    }

    /// Stability verdict of the current design.
    pub fn is_stable(&self) -> bool {
        self.state.is_stable
    }

    /// Re-export the current design at a different sample rate.
    ///
    /// Returns an empty vector if nothing has been designed yet or if
    /// `sample_rate` is not above `f64::EPSILON`. The retained
    /// coefficients are not modified.
    pub fn export_coefficients_at(&self, sample_rate: f64) -> Vec<f64> {
        match self.designed {
            Some(p) => export_coefficients(&p.with_sample_rate(sample_rate)),
            None => Vec::new(),
        }
    }

    /// Magnitude response in dB at `freq` Hz.
    pub fn gain_at(&self, freq: f64, sample_rate: f64) -> f64 {
        response::gain_db(&self.state.coeffs, freq, sample_rate)
    }

    /// Group delay in samples at `freq` Hz.
    pub fn group_delay_at(&self, freq: f64, sample_rate: f64) -> f64 {
        response::group_delay(&self.state.coeffs, freq, sample_rate)
    }

    /// Fill `dst` with the magnitude response in dB at each of `freqs`.
    pub fn gain_curve(&self, dst: &mut [f64], freqs: &[f64], sample_rate: f64) {
        response::gain_curve(dst, freqs, &self.state.coeffs, sample_rate);
    }

    /// Fill `dst` with the group delay in samples at each of `freqs`.
    pub fn group_delay_curve(&self, dst: &mut [f64], freqs: &[f64], sample_rate: f64) {
        response::group_delay_curve(dst, freqs, &self.state.coeffs, sample_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::consts::BUTTERWORTH_Q;

    const SR: f64 = 48000.0;

    fn lowpass_1k() -> DesignParameters {
        DesignParameters::default()
            .with_filter_type(FilterType::LowPass)
            .with_frequency(1000.0)
            .with_q(BUTTERWORTH_Q)
    }

    #[test]
    fn construction_defaults() {
        let f = Biquad::new();
        assert!(f.dirty);
        assert!(!f.is_stable());
        assert!(f.designed_params().is_none());
        assert_eq!(f.taps().to_array(), [0.0; 5]);
        assert_eq!(f.params(), &DesignParameters::default());
    }

    #[test]
    fn builder_pattern() {
        let mut f = Biquad::new();
        f.set_sample_rate(44100.0)
            .set_filter_type(FilterType::LowPass)
            .set_frequency(500.0)
            .set_q(1.0)
            .set_gain(3.0)
            .update_settings();

        assert!(!f.dirty);
        assert!(f.is_stable());
        let p = f.designed_params().copied().unwrap_or_default();
        assert_eq!(p.sample_rate, 44100.0);
        assert_eq!(p.center_freq, 500.0);
    }

    #[test]
    fn dirty_flag_set_by_each_setter() {
        let mut f = Biquad::new();
        f.update_settings();
        assert!(!f.dirty, "Should be clean after update_settings");

        f.set_sample_rate(44100.0);
        assert!(f.dirty, "set_sample_rate should mark dirty");
        f.update_settings();

        f.set_filter_type(FilterType::HighPass);
        assert!(f.dirty, "set_filter_type should mark dirty");
        f.update_settings();

        f.set_frequency(500.0);
        assert!(f.dirty, "set_frequency should mark dirty");
        f.update_settings();

        f.set_q(2.0);
        assert!(f.dirty, "set_q should mark dirty");
        f.update_settings();

        f.set_bandwidth(1.0);
        assert!(f.dirty, "set_bandwidth should mark dirty");
        f.update_settings();

        f.set_shape(ShapeSelector::Q);
        assert!(f.dirty, "set_shape should mark dirty");
        f.update_settings();

        f.set_gain(3.0);
        assert!(f.dirty, "set_gain should mark dirty");
        f.update_settings();
        assert!(!f.dirty, "Should be clean after final update_settings");
    }

    #[test]
    fn update_settings_matches_design() {
        let mut built = Biquad::new();
        built
            .set_filter_type(FilterType::HighShelf)
            .set_frequency(6000.0)
            .set_bandwidth(0.8)
            .set_gain(-3.0)
            .update_settings();

        let direct = Biquad::designed(
            DesignParameters::default()
                .with_filter_type(FilterType::HighShelf)
                .with_frequency(6000.0)
                .with_slope(0.8)
                .with_gain(-3.0),
        );

        assert_eq!(built.coefficients(), direct.coefficients());
    }

    #[test]
    fn invalid_design_keeps_previous_state() {
        let mut f = Biquad::designed(lowpass_1k());
        let before = f.coefficients();

        f.design(lowpass_1k().with_frequency(0.0));
        assert_eq!(f.coefficients(), before);
        assert_eq!(f.designed_params(), Some(&lowpass_1k()));

        f.design(lowpass_1k().with_sample_rate(0.0));
        assert_eq!(f.coefficients(), before);
    }

    #[test]
    fn invalid_first_design_stays_undesigned() {
        let f = Biquad::designed(lowpass_1k().with_sample_rate(-1.0));
        assert!(f.designed_params().is_none());
        assert!(!f.is_stable());
        assert!(f.export_coefficients_at(SR).is_empty());
    }

    #[test]
    fn design_stores_leading_tap() {
        let p = lowpass_1k();
        let f = Biquad::designed(p);
        let exported = export_coefficients(&p);
        assert_eq!(f.taps().b0, exported[0]);
    }

    #[test]
    fn export_at_new_sample_rate() {
        let f = Biquad::designed(lowpass_1k());
        let at_96k = f.export_coefficients_at(96000.0);
        let expected = export_coefficients(&lowpass_1k().with_sample_rate(96000.0));
        assert_eq!(at_96k, expected);

        // Retained state is untouched
        assert_eq!(f.designed_params().map(|p| p.sample_rate), Some(SR));
        assert!(f.export_coefficients_at(0.0).is_empty());
    }

    #[test]
    fn freq_response_lowpass() {
        let f = Biquad::designed(lowpass_1k());

        let dc = f.gain_at(1.0, SR);
        assert!(dc.abs() < 0.01, "LPF gain near DC should be ~0 dB, got {dc}");

        let cutoff = f.gain_at(1000.0, SR);
        assert!(
            (cutoff + 3.0103).abs() < 0.01,
            "Butterworth LPF at cutoff should be ~-3 dB, got {cutoff}"
        );

        let top = f.gain_at(SR / 2.0 - 1.0, SR);
        assert!(top < -40.0, "LPF gain near Nyquist should be very low, got {top}");
    }

    #[test]
    fn group_delay_lowpass_is_positive_in_passband() {
        let f = Biquad::designed(lowpass_1k());
        for &freq in &[10.0, 100.0, 500.0, 1000.0] {
            let d = f.group_delay_at(freq, SR);
            assert!(d > 0.0, "LPF delay at {freq} Hz should be positive, got {d}");
        }
    }

    #[test]
    fn curves_match_single_queries() {
        let f = Biquad::designed(
            DesignParameters::default()
                .with_filter_type(FilterType::Notch)
                .with_frequency(3000.0)
                .with_q(4.0),
        );
        let freqs = [50.0, 500.0, 2000.0, 8000.0];
        let mut gains = [0.0; 4];
        let mut delays = [0.0; 4];
        f.gain_curve(&mut gains, &freqs, SR);
        f.group_delay_curve(&mut delays, &freqs, SR);
        for i in 0..4 {
            assert!((gains[i] - f.gain_at(freqs[i], SR)).abs() < 1e-12);
            assert!((delays[i] - f.group_delay_at(freqs[i], SR)).abs() < 1e-9);
        }
    }
}
