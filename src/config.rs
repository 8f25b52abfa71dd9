/// Shortest lookback period the efficiency ratio can be computed over.
pub const MIN_PERIOD: i64 = 2;

/// Longest lookback period accepted at construction.
pub const MAX_LOOKBACK_PERIOD: i64 = 100_000;

/// Conventional KAMA lookback period.
pub const DEFAULT_PERIOD: i64 = 25;

/// Construction errors. Every variant is an invalid parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    PeriodTooShort(i64),
    PeriodTooLong(i64),
    MissingCallback,
}

impl ConfigError {
    /// Always true: construction only fails on bad parameters.
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            ConfigError::PeriodTooShort(_)
                | ConfigError::PeriodTooLong(_)
                | ConfigError::MissingCallback
        )
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::PeriodTooShort(period) => write!(
                f,
                "invalid parameter: period {} is less than the minimum ({})",
                period, MIN_PERIOD
            ),
            ConfigError::PeriodTooLong(period) => write!(
                f,
                "invalid parameter: period {} is greater than the maximum ({})",
                period, MAX_LOOKBACK_PERIOD
            ),
            ConfigError::MissingCallback => {
                write!(f, "invalid parameter: an output callback is required")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Lookback window length for the efficiency ratio.
    pub period: i64,
}

impl Config {
    pub const fn new(period: i64) -> Self {
        Self { period }
    }

    /// Checks the period against the accepted range and returns it as a length.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if self.period < MIN_PERIOD {
            return Err(ConfigError::PeriodTooShort(self.period));
        }

        if self.period > MAX_LOOKBACK_PERIOD {
            return Err(ConfigError::PeriodTooLong(self.period));
        }

        // In range, so the cast cannot truncate
        Ok(self.period as usize)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}
