//! Efficiency ratio and adaptive smoothing constant.
//!
//! KAMA maps the efficiency ratio `er` in `[0, 1]` onto an exponential smoothing
//! constant between the slow (30 period) and fast (2 period) EMA constants:
//! `sc = (er * (fast - slow) + slow)^2`.

use num_traits::float::FloatCore;

/// EMA constant of a 2 period average: 2 / (2 + 1)
pub const FAST_CONSTANT: f64 = 2.0 / (2.0 + 1.0);

/// EMA constant of a 30 period average: 2 / (30 + 1)
pub const SLOW_CONSTANT: f64 = 2.0 / (30.0 + 1.0);

/// FAST_CONSTANT - SLOW_CONSTANT
pub const CONSTANT_DIFF: f64 = FAST_CONSTANT - SLOW_CONSTANT;

/// Noise sums inside (-ZERO_EPSILON, ZERO_EPSILON) count as zero.
pub const ZERO_EPSILON: f64 = 1e-14;

#[inline]
pub fn is_zero(value: f64) -> bool {
    -ZERO_EPSILON < value && value < ZERO_EPSILON
}

/// Ratio of net change to total churn over the lookback window.
///
/// Clamps to 1.0 (perfectly efficient) when the noise sum does not exceed the
/// signed net change or is numerically zero, so it never divides by zero.
#[inline]
pub fn efficiency_ratio(net_change: f64, noise_sum: f64) -> f64 {
    if noise_sum <= net_change || is_zero(noise_sum) {
        1.0
    } else {
        FloatCore::abs(net_change / noise_sum)
    }
}

/// Squared adaptive smoothing constant for an efficiency ratio.
#[inline]
pub fn smoothing_constant(efficiency_ratio: f64) -> f64 {
    let sc = efficiency_ratio * CONSTANT_DIFF + SLOW_CONSTANT;
    sc * sc
}

/// Single pole EMA step: previous + (input - previous) * sc
#[inline]
pub fn smooth(previous: f64, input: f64, smoothing_constant: f64) -> f64 {
    debug_assert!(
        (0.0..=1.0).contains(&smoothing_constant),
        "smoothing constant must be in [0.0, 1.0], got {}",
        smoothing_constant
    );

    (input - previous) * smoothing_constant + previous
}
