use crate::config::{Config, ConfigError, DEFAULT_PERIOD};
use crate::smoother::AdaptiveSmoother;

/// Fluent construction of an [`AdaptiveSmoother`].
///
/// The smoother has no other way to surface results, so [`build`] fails with
/// [`ConfigError::MissingCallback`] unless [`on_value`] was called.
///
/// [`build`]: SmootherBuilder::build
/// [`on_value`]: SmootherBuilder::on_value
#[derive(Debug, Clone)]
pub struct SmootherBuilder<F = fn(f64, usize)> {
    period: i64,
    on_value: Option<F>,
}

impl SmootherBuilder {
    pub const fn new() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            on_value: None,
        }
    }
}

impl Default for SmootherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> SmootherBuilder<F> {
    pub fn period(mut self, period: i64) -> Self {
        self.period = period;
        self
    }

    pub fn on_value<G>(self, on_value: G) -> SmootherBuilder<G>
    where
        G: FnMut(f64, usize),
    {
        SmootherBuilder {
            period: self.period,
            on_value: Some(on_value),
        }
    }
}

impl<F> SmootherBuilder<F>
where
    F: FnMut(f64, usize),
{
    pub fn build(self) -> Result<AdaptiveSmoother<F>, ConfigError> {
        let on_value = self.on_value.ok_or_else(|| {
            log::warn!("rejected KAMA configuration: {}", ConfigError::MissingCallback);
            ConfigError::MissingCallback
        })?;

        AdaptiveSmoother::new(Config::new(self.period), on_value)
    }
}
