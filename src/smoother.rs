use num_traits::AsPrimitive;

use crate::bounds::ResultBounds;
use crate::builder::SmootherBuilder;
use crate::config::{Config, ConfigError};
use crate::state::KamaState;

/// Push-style KAMA: every produced value is handed to `on_value` together with
/// the index of the sample that produced it, from inside [`submit`].
///
/// [`submit`]: AdaptiveSmoother::submit
pub struct AdaptiveSmoother<F>
where
    F: FnMut(f64, usize),
{
    state: KamaState,
    on_value: F,
}

impl<F> AdaptiveSmoother<F>
where
    F: FnMut(f64, usize),
{
    pub fn new(config: Config, on_value: F) -> Result<Self, ConfigError> {
        Ok(Self {
            state: KamaState::new(&config)?,
            on_value,
        })
    }

    /// Consume one sample in arrival order.
    ///
    /// `index` is passed through to the callback and to [`valid_from_bar`];
    /// it should not decrease between calls.
    ///
    /// [`valid_from_bar`]: AdaptiveSmoother::valid_from_bar
    pub fn submit<T>(&mut self, sample: T, index: usize)
    where
        T: AsPrimitive<f64>,
    {
        if let Some(value) = self.state.update(sample.as_(), index) {
            (self.on_value)(value, index);
        }
    }

    /// Number of samples consumed before the first value: the period
    pub fn lookback_period(&self) -> usize {
        self.state.period()
    }

    /// Number of values emitted so far
    pub fn data_length(&self) -> usize {
        self.state.bounds().count()
    }

    /// Index of the sample that produced the first value
    pub fn valid_from_bar(&self) -> Option<usize> {
        self.state.bounds().valid_from()
    }

    pub fn max_value(&self) -> Option<f64> {
        self.state.bounds().max()
    }

    pub fn min_value(&self) -> Option<f64> {
        self.state.bounds().min()
    }

    pub fn bounds(&self) -> &ResultBounds {
        self.state.bounds()
    }

    pub fn is_warmed_up(&self) -> bool {
        self.state.is_warmed_up()
    }

    pub fn window_len(&self) -> usize {
        self.state.window_len()
    }
}

impl AdaptiveSmoother<fn(f64, usize)> {
    /// Start building a smoother; the callback is supplied with
    /// [`SmootherBuilder::on_value`].
    pub fn builder() -> SmootherBuilder {
        SmootherBuilder::new()
    }
}
