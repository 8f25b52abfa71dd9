use approx::{assert_abs_diff_eq, assert_relative_eq};
use kama_stream::efficiency::{FAST_CONSTANT, SLOW_CONSTANT};
use kama_stream::{AdaptiveSmoother, Config};

fn run(period: i64, samples: &[f64]) -> Vec<(f64, usize)> {
    let mut emitted = Vec::new();
    let mut smoother =
        AdaptiveSmoother::new(Config::new(period), |value, index| emitted.push((value, index)))
            .expect("Valid config");

    for (index, &sample) in samples.iter().enumerate() {
        smoother.submit(sample, index);
    }
    drop(smoother);

    emitted
}

/// Recomputes the noise sum over the whole lookback for every sample.
fn reference(period: usize, samples: &[f64]) -> Vec<f64> {
    let mut outputs = Vec::new();
    let mut previous = 0.0;

    for n in period..samples.len() {
        if n == period {
            previous = samples[n - 1];
        }

        let net = samples[n] - samples[n - period];
        let noise: f64 = (n - period + 1..=n)
            .map(|i| (samples[i] - samples[i - 1]).abs())
            .sum();

        let er = if noise <= net || noise.abs() < 1e-14 {
            1.0
        } else {
            (net / noise).abs()
        };
        let sc = (er * (FAST_CONSTANT - SLOW_CONSTANT) + SLOW_CONSTANT).powi(2);

        previous += (samples[n] - previous) * sc;
        outputs.push(previous);
    }

    outputs
}

// Deterministic noisy walk
fn walk(len: usize) -> Vec<f64> {
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    let mut price = 100.0;
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            price += (seed % 2001) as f64 / 1000.0 - 1.0;
            price
        })
        .collect()
}

#[test]
fn test_short_sequence_values() {
    let emitted = run(2, &[10.0, 11.0, 9.0, 12.0, 15.0]);

    let indices: Vec<usize> = emitted.iter().map(|&(_, index)| index).collect();
    assert_eq!(indices, vec![2, 3, 4]);

    assert_relative_eq!(emitted[0].0, 10.859302938040365, epsilon = 1e-9);
    assert_relative_eq!(emitted[1].0, 10.898320606997485, epsilon = 1e-9);
    assert_relative_eq!(emitted[2].0, 12.721289226109713, epsilon = 1e-9);
    assert!(emitted.iter().all(|&(value, _)| value.is_finite()));
}

#[test]
fn test_constant_input_reproduces_constant() {
    let samples = vec![42.25; 100];
    for (value, _) in run(10, &samples) {
        assert_eq!(value, 42.25);
    }
}

#[test]
fn test_monotonic_trend_uses_fast_constant() {
    let samples: Vec<f64> = (1..=40).map(|i| i as f64).collect();
    let emitted = run(5, &samples);
    let fast_squared = FAST_CONSTANT * FAST_CONSTANT;

    // Seed is the sample before the first emission
    let mut previous = samples[4];
    for &(value, index) in &emitted {
        let expected = previous + (samples[index] - previous) * fast_squared;
        assert_abs_diff_eq!(value, expected, epsilon = 1e-12);
        previous = value;
    }
}

#[test]
fn test_falling_trend_tracks_price() {
    let samples: Vec<f64> = (0..60).map(|i| 500.0 - 2.0 * i as f64).collect();
    let emitted = run(10, &samples);
    let (last, index) = *emitted.last().expect("values emitted");

    // Perfect efficiency: the lag approaches slope * (1 - fast^2) / fast^2 = 2.5
    assert!(last >= samples[index]);
    assert!(last - samples[index] <= 2.5 + 1e-9);
}

#[test]
fn test_matches_full_recomputation() {
    let samples = walk(2_000);

    for period in [2_usize, 3, 10, 25] {
        let expected = reference(period, &samples);
        let emitted = run(period as i64, &samples);

        assert_eq!(emitted.len(), expected.len());
        for (&(value, _), &want) in emitted.iter().zip(&expected) {
            assert_relative_eq!(value, want, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_output_stays_within_sample_range() {
    let samples = walk(500);
    let low = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let high = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Every step moves toward the sample by a factor in [slow^2, fast^2]
    for (value, _) in run(8, &samples) {
        assert!(value >= low && value <= high);
    }
}

#[test]
fn test_choppy_market_smooths_more_than_trend() {
    // Same net move of 10 over the lookback, one direct and one choppy
    let trend: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let choppy: Vec<f64> = (0..=10)
        .map(|i| if i == 10 { 10.0 } else if i % 2 == 0 { 0.0 } else { 8.0 })
        .collect();

    let trend_step = run(10, &trend)[0].0 - trend[9];
    let choppy_step = run(10, &choppy)[0].0 - choppy[9];

    // Both move toward 10; the efficient series moves a larger fraction
    assert!(trend_step / (10.0 - trend[9]) > choppy_step / (10.0 - choppy[9]));
}
