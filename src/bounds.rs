/// Running statistics over every value the indicator has emitted.
///
/// Purely observational: nothing here feeds back into the recurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultBounds {
    max: f64,
    min: f64,
    count: usize,
    valid_from: Option<usize>,
}

impl ResultBounds {
    pub const fn new() -> Self {
        Self {
            max: f64::NEG_INFINITY,
            min: f64::INFINITY,
            count: 0,
            valid_from: None,
        }
    }

    /// Account for a newly emitted value at stream position `index`
    pub fn record(&mut self, value: f64, index: usize) {
        if self.valid_from.is_none() {
            self.valid_from = Some(index);
        }

        self.count += 1;

        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    /// Largest emitted value, `None` before the first emission
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// Smallest emitted value, `None` before the first emission
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Stream index of the first emitted value
    pub fn valid_from(&self) -> Option<usize> {
        self.valid_from
    }
}

impl Default for ResultBounds {
    fn default() -> Self {
        Self::new()
    }
}
