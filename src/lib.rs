//! # emergence
//!
//! Monte Carlo demonstrations of statistical emergence.
//!
//! Two small programs built on a shared library:
//! - `scale_curves`: renders the rational family y = x/(x+k) for k ∈ {1,2,3}
//!   as a comparative line-and-marker chart.
//! - `photon_counts`: simulates a Bernoulli counting process (the classic
//!   photon-arrival experiment) and replays the growth of the count histogram
//!   as an animated GIF, showing the Poisson shape emerge.
//!
//! ## Example
//!
//! ```rust
//! use emergence::prelude::*;
//!
//! let counter = TrialCounter::new(3.0e-3, 1000).unwrap();
//! let mut rng = SimRng::new(42);
//! let history = CountingProcess::new(counter).run(100, &mut rng).unwrap();
//! assert_eq!(history.len(), 100);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
)]

pub mod config;
pub mod domains;
pub mod engine;
pub mod error;
pub mod visualization;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{DemoConfig, DemoConfigBuilder};
    pub use crate::domains::counting::{CountHistory, CountingProcess, TrialCounter};
    pub use crate::domains::curves::{RationalCurve, SampleGrid};
    pub use crate::engine::rng::SimRng;
    pub use crate::error::{SimError, SimResult};
    pub use crate::visualization::{ChartSpec, HistogramSpec, Renderer};
}

/// Re-export for public API
pub use error::{SimError, SimResult};
