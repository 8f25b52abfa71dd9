//! Pull-style access to the KAMA recurrence.
//!
//! [`Kama`] returns each value instead of pushing it through a callback, and
//! [`KamaIter`] adapts any sample iterator into an iterator of emitted values.

use num_traits::AsPrimitive;

use crate::bounds::ResultBounds;
use crate::config::{Config, ConfigError};
use crate::state::KamaState;

#[derive(Debug, Clone)]
pub struct Kama {
    state: KamaState,
}

impl Kama {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Ok(Self {
            state: KamaState::new(&config)?,
        })
    }

    /// Feed one sample; `None` while the indicator is still warming up.
    pub fn next<T>(&mut self, sample: T, index: usize) -> Option<f64>
    where
        T: AsPrimitive<f64>,
    {
        self.state.update(sample.as_(), index)
    }

    /// Turn a sample sequence into `(value, index)` pairs, one per emitted value.
    ///
    /// Indices count samples from zero, continuing on from the samples
    /// consumed so far.
    pub fn iter<I, T>(self, samples: I) -> KamaIter<I::IntoIter>
    where
        I: IntoIterator<Item = T>,
        T: AsPrimitive<f64>,
    {
        let index = self.state.samples_seen();
        KamaIter {
            kama: self,
            samples: samples.into_iter(),
            index,
        }
    }

    pub fn lookback_period(&self) -> usize {
        self.state.period()
    }

    pub fn data_length(&self) -> usize {
        self.state.bounds().count()
    }

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
}

impl Default for Kama {
    /// KAMA over the conventional 25 sample period
    fn default() -> Self {
        Self {
            state: KamaState::with_default_period(),
        }
    }
}

/// Iterator over the values a [`Kama`] emits for a sample sequence.
#[derive(Debug, Clone)]
pub struct KamaIter<I> {
    kama: Kama,
    samples: I,
    index: usize,
}

impl<I> KamaIter<I> {
    /// The indicator, with all state accumulated so far
    pub fn kama(&self) -> &Kama {
        &self.kama
    }

    pub fn into_kama(self) -> Kama {
        self.kama
    }
}

impl<I, T> Iterator for KamaIter<I>
where
    I: Iterator<Item = T>,
    T: AsPrimitive<f64>,
{
    type Item = (f64, usize);

    fn next(&mut self) -> Option<Self::Item> {
        // Skip over warm-up samples until a value comes out
        for sample in self.samples.by_ref() {
            let index = self.index;
            self.index += 1;

            if let Some(value) = self.kama.next(sample, index) {
                return Some((value, index));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.samples.size_hint().1)
    }
}
