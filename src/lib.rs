#![no_std]

extern crate alloc;

mod builder;
mod config;
mod smoother;
mod state;
pub mod bounds;
pub mod efficiency;
pub mod pull;
pub mod window;

pub use builder::SmootherBuilder;
pub use config::{Config, ConfigError, DEFAULT_PERIOD, MAX_LOOKBACK_PERIOD, MIN_PERIOD};
pub use smoother::AdaptiveSmoother;
pub use state::KamaState;
pub use bounds::ResultBounds;
pub use pull::{Kama, KamaIter};
pub use window::SlidingWindow;
