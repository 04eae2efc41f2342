// SPDX-License-Identifier: LGPL-3.0-or-later

//! Criterion benchmarks for the response kernels.

use biquad_dsp_lib::response::{gain_curve, group_delay_curve, log_frequencies};
use biquad_dsp_lib::types::BiquadCoeffs;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const SR: f64 = 48000.0;

fn peaking_coeffs() -> BiquadCoeffs {
    // +6 dB bell at 1 kHz, Q = 1, 48 kHz
    BiquadCoeffs {
        b0: 1.0228117417590867,
        b1: -1.9465090713785455,
        b2: 0.9288087393064316,
        a1: 1.9465090713785455,
        a2: -0.9516204810655183,
    }
}

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_curves");
    let coeffs = peaking_coeffs();

    for &points in &[256usize, 2048] {
        let mut freqs = vec![0.0f64; points];
        log_frequencies(&mut freqs, 10.0, 24000.0);
        let mut out = vec![0.0f64; points];

        group.bench_function(format!("gain_{points}"), |b| {
            b.iter(|| gain_curve(black_box(&mut out), black_box(&freqs), &coeffs, SR));
        });
        group.bench_function(format!("group_delay_{points}"), |b| {
            b.iter(|| group_delay_curve(black_box(&mut out), black_box(&freqs), &coeffs, SR));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_curves);
criterion_main!(benches);
