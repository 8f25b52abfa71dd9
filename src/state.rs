use core::cmp::Ordering;

use num_traits::float::FloatCore;

use crate::bounds::ResultBounds;
use crate::config::{Config, ConfigError, DEFAULT_PERIOD};
use crate::efficiency::{efficiency_ratio, smooth, smoothing_constant};
use crate::window::SlidingWindow;

/// KAMA recurrence state shared by the push and pull front ends.
#[derive(Debug, Clone)]
pub struct KamaState {
    period: usize,
    /// Last `period + 1` raw samples
    window: SlidingWindow,
    /// Rolling sum of |x[i] - x[i-1]| over the window
    noise_sum: f64,
    /// Starts at -(period + 1); zero on the first emission
    period_counter: i64,
    previous_input: Option<f64>,
    previous_output: Option<f64>,
    bounds: ResultBounds,
}

impl KamaState {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let period = config.validate().inspect_err(|err| {
            log::warn!("rejected KAMA configuration: {}", err);
        })?;

        Ok(Self::with_period(period))
    }

    /// State over the conventional 25 sample period
    pub fn with_default_period() -> Self {
        Self::with_period(DEFAULT_PERIOD as usize)
    }

    // Caller guarantees MIN_PERIOD <= period <= MAX_LOOKBACK_PERIOD
    fn with_period(period: usize) -> Self {
        log::debug!("KAMA state created with period {}", period);

        Self {
            period,
            window: SlidingWindow::new(period + 1),
            noise_sum: 0.0,
            period_counter: -(period as i64 + 1),
            previous_input: None,
            previous_output: None,
            bounds: ResultBounds::new(),
        }
    }

    /// Feed one sample. Returns the new KAMA value once warm-up is over.
    pub fn update(&mut self, sample: f64, index: usize) -> Option<f64> {
        self.period_counter = self.period_counter.saturating_add(1);

        if self.period_counter <= 0 {
            if let Some(previous) = self.previous_input {
                self.noise_sum += FloatCore::abs(sample - previous);
            }
        }

        // Window lookups happen before the sample is stored, so the buffer
        // front is still the value period + 1 samples back.
        let result = match self.period_counter.cmp(&0) {
            Ordering::Less => None,
            Ordering::Equal => Some(self.first_output(sample, index)),
            Ordering::Greater => Some(self.next_output(sample)),
        };

        if let Some(value) = result {
            self.bounds.record(value, index);
            self.previous_output = Some(value);
        }

        self.previous_input = Some(sample);
        self.window.push(sample);

        result
    }

    // Warm-up completion: no smoothed value exists yet, so the previous raw
    // sample stands in for it.
    fn first_output(&mut self, sample: f64, index: usize) -> f64 {
        debug_assert!(self.previous_input.is_some());

        let start = self.window.front().unwrap_or(sample);
        let seed = self.previous_input.unwrap_or(sample);
        let value = self.adapt(seed, sample, sample - start);

        log::trace!(
            "KAMA warm-up complete at index {}: seed {}, first value {}",
            index,
            seed,
            value
        );

        value
    }

    fn next_output(&mut self, sample: f64) -> f64 {
        debug_assert!(self.window.is_full());

        let (start, start1) = match (self.window.get(0), self.window.get(1)) {
            (Some(start), Some(start1)) => (start, start1),
            _ => (sample, sample),
        };

        // Slide the noise sum: drop the oldest change, add the newest
        self.noise_sum -= FloatCore::abs(start1 - start);
        if let Some(previous) = self.previous_input {
            self.noise_sum += FloatCore::abs(sample - previous);
        }

        let previous = self.previous_output.unwrap_or(sample);
        self.adapt(previous, sample, sample - start1)
    }

    fn adapt(&self, previous: f64, sample: f64, net_change: f64) -> f64 {
        let er = efficiency_ratio(net_change, self.noise_sum);
        smooth(previous, sample, smoothing_constant(er))
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn bounds(&self) -> &ResultBounds {
        &self.bounds
    }

    /// True once the first value has been emitted
    pub fn is_warmed_up(&self) -> bool {
        self.period_counter >= 0
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Number of samples consumed so far
    pub fn samples_seen(&self) -> usize {
        (self.period_counter + self.period as i64 + 1) as usize
    }

    /// Current rolling sum of absolute changes
    pub fn noise_sum(&self) -> f64 {
        self.noise_sum
    }
}
