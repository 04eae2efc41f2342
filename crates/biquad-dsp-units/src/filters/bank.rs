// SPDX-License-Identifier: LGPL-3.0-or-later

//! Filter bank: N independent biquad sections analysed as a cascade.
//!
//! Each section is designed on its own. The combined magnitude is the sum
//! of the per-section dB values and the combined group delay is the sum of
//! the per-section delays, so no higher-order transfer function is ever
//! formed or decomposed.

use biquad_dsp_lib::response;
use tracing::debug;

use crate::consts::DEFAULT_SAMPLE_RATE;

use super::coeffs::FilterType;
use super::filter::Biquad;

/// A bank of N biquad sections sharing one sample rate.
///
/// Each section is independently configurable via
/// [`filter_mut`](FilterBank::filter_mut). A sample rate set on a single
/// section is overridden by the bank rate on the next
/// [`update_settings`](FilterBank::update_settings).
///
/// # Examples
///
/// ```
/// use biquad_dsp_units::filters::bank::FilterBank;
/// use biquad_dsp_units::filters::coeffs::FilterType;
///
/// let mut bank = FilterBank::new(3);
/// bank.set_sample_rate(48000.0);
/// bank.filter_mut(0).set_filter_type(FilterType::LowShelf).set_frequency(200.0).set_gain(3.0);
/// bank.filter_mut(1).set_filter_type(FilterType::Peaking).set_frequency(1000.0).set_gain(-2.0);
/// bank.filter_mut(2).set_filter_type(FilterType::HighShelf).set_frequency(8000.0).set_gain(1.5);
/// bank.update_settings();
///
/// assert!(bank.is_stable());
/// let g = bank.gain_at(1000.0);
/// assert!(g < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct FilterBank {
    filters: Vec<Biquad>,
    sample_rate: f64,
    dirty: bool,
}

impl FilterBank {
    /// Create a new bank of `n_filters` sections.
    ///
    /// All sections start as [`FilterType::UnityGain`] at 0 dB, so a
    /// freshly updated bank is transparent.
    pub fn new(n_filters: usize) -> Self {
        let filters = (0..n_filters)
            .map(|_| {
                let mut f = Biquad::new();
                f.set_filter_type(FilterType::UnityGain).set_gain(0.0);
                f
            })
            .collect();

        Self {
            filters,
            sample_rate: DEFAULT_SAMPLE_RATE,
            dirty: true,
        }
    }

    /// Set the sample rate for all sections.
    pub fn set_sample_rate(&mut self, sr: f64) {
        self.sample_rate = sr;
        for f in &mut self.filters {
            f.set_sample_rate(sr);
        }
        self.dirty = true;
    }

    /// Sample rate used for design and analysis.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Get a reference to the section at `index`, if present.
    pub fn filter(&self, index: usize) -> Option<&Biquad> {
        self.filters.get(index)
    }

    /// Get a mutable reference to the section at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_filters`.
    pub fn filter_mut(&mut self, index: usize) -> &mut Biquad {
        self.dirty = true;
        &mut self.filters[index]
    }

    /// Return the number of sections in the bank.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Return true if the bank has no sections.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate over the sections in order.
    pub fn iter(&self) -> impl Iterator<Item = &Biquad> {
        self.filters.iter()
    }

    /// Redesign every section with pending changes.
    ///
    /// Sections whose pending sample rate differs from the bank rate are
    /// reset to the bank rate first.
    pub fn update_settings(&mut self) {
        if !self.dirty {
            return;
        }

        for f in &mut self.filters {
            if f.params().sample_rate != self.sample_rate {
                debug!(
                    section_rate = f.params().sample_rate,
                    bank_rate = self.sample_rate,
                    "section sample rate overridden by bank"
                );
                f.set_sample_rate(self.sample_rate);
            }
            f.update_settings();
        }

        let unstable = self.filters.iter().filter(|f| !f.is_stable()).count();
        if unstable > 0 {
            debug!(unstable, sections = self.filters.len(), "filter bank has unstable sections");
        }

        self.dirty = false;
    }

    /// Returns `true` only if every section's current design is stable.
    ///
    /// An empty bank is trivially stable.
    pub fn is_stable(&self) -> bool {
        self.filters.iter().all(Biquad::is_stable)
    }

    /// Combined magnitude in dB at `freq` Hz (sum of section gains).
    pub fn gain_at(&self, freq: f64) -> f64 {
        self.filters
            .iter()
            .map(|f| f.gain_at(freq, self.sample_rate))
            .sum()
    }

    /// Combined group delay in samples at `freq` Hz (sum of section delays).
    pub fn group_delay_at(&self, freq: f64) -> f64 {
        self.filters
            .iter()
            .map(|f| f.group_delay_at(freq, self.sample_rate))
            .sum()
    }

    /// Fill `dst` with the combined magnitude in dB at each of `freqs`.
    ///
    /// Processes `min(dst.len(), freqs.len())` points.
    pub fn gain_curve(&self, dst: &mut [f64], freqs: &[f64]) {
        let n = dst.len().min(freqs.len());
        let dst = &mut dst[..n];
        dst.fill(0.0);
        let mut section = vec![0.0; n];

        for f in &self.filters {
            response::gain_curve(&mut section, &freqs[..n], f.taps(), self.sample_rate);
            accumulate(dst, &section);
        }
    }

    /// Fill `dst` with the combined group delay in samples at each of `freqs`.
    pub fn group_delay_curve(&self, dst: &mut [f64], freqs: &[f64]) {
        let n = dst.len().min(freqs.len());
        let dst = &mut dst[..n];
        dst.fill(0.0);
        let mut section = vec![0.0; n];

        for f in &self.filters {
            response::group_delay_curve(&mut section, &freqs[..n], f.taps(), self.sample_rate);
            accumulate(dst, &section);
        }
    }
}

fn accumulate(dst: &mut [f64], src: &[f64]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d += s;
    }
}
