//! Domain logic for the two demonstrations.
//!
//! - [`curves`] — the rational curve family behind the scale-dependence chart.
//! - [`counting`] — the Bernoulli/Poisson counting process behind the
//!   animated histogram.

pub mod counting;
pub mod curves;

pub use counting::{CountHistory, CountingProcess, TrialCounter};
pub use curves::{RationalCurve, SampleGrid};
