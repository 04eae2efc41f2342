// SPDX-License-Identifier: LGPL-3.0-or-later

//! Criterion benchmarks for coefficient design and bank analysis.

use biquad_dsp_lib::response::log_frequencies;
use biquad_dsp_units::filters::bank::FilterBank;
use biquad_dsp_units::filters::coeffs::{FilterType, calc_biquad_coeffs, export_coefficients};
use biquad_dsp_units::filters::params::DesignParameters;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::FRAC_1_SQRT_2;

const CURVE_POINTS: usize = 512;

fn bench_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("design");

    for ft in [FilterType::LowPass, FilterType::Peaking, FilterType::HighShelf] {
        let p = DesignParameters::default()
            .with_filter_type(ft)
            .with_frequency(2000.0)
            .with_gain(-3.0)
            .with_q(FRAC_1_SQRT_2);

        group.bench_function(format!("{ft:?}"), |b| {
            b.iter(|| calc_biquad_coeffs(black_box(&p)));
        });
    }

    let p = DesignParameters::default()
        .with_filter_type(FilterType::Peaking)
        .with_bandwidth(1.0);
    group.bench_function("export_bandwidth", |b| {
        b.iter(|| export_coefficients(black_box(&p)));
    });

    group.finish();
}

fn bench_filter_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_bank");

    // Typical 8-band parametric EQ setup
    let freqs = [60.0, 200.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0, 16000.0];
    let gains = [2.0, -1.0, 0.0, 1.5, -2.0, 1.0, -0.5, -1.0];
    let types = [
        FilterType::LowShelf,
        FilterType::Peaking,
        FilterType::Peaking,
        FilterType::Peaking,
        FilterType::Peaking,
        FilterType::Peaking,
        FilterType::Peaking,
        FilterType::HighShelf,
    ];

    let mut bank = FilterBank::new(8);
    bank.set_sample_rate(48000.0);
    for i in 0..8 {
        bank.filter_mut(i)
            .set_filter_type(types[i])
            .set_frequency(freqs[i])
            .set_gain(gains[i])
            .set_q(1.0);
    }
    bank.update_settings();

    let mut axis = vec![0.0f64; CURVE_POINTS];
    log_frequencies(&mut axis, 20.0, 20000.0);
    let mut out = vec![0.0f64; CURVE_POINTS];

    group.bench_function("8_bands_gain_curve", |b| {
        b.iter(|| bank.gain_curve(black_box(&mut out), black_box(&axis)));
    });
    group.bench_function("8_bands_group_delay_curve", |b| {
        b.iter(|| bank.group_delay_curve(black_box(&mut out), black_box(&axis)));
    });

    group.finish();
}

criterion_group!(benches, bench_design, bench_filter_bank);
criterion_main!(benches);
