//! Rational curve family for the scale-dependence chart.
//!
//! The chart compares y = x/(x+k) for k ∈ {1, 2, 3} over a shared base
//! sequence. All formulas are total on the sampled domain; for x ∈ [0, 1)
//! every derived value also lies in [0, 1).

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::visualization::{Series, SeriesColor};

/// Ordered sequence of evenly spaced sample points x_i = i · step.
///
/// Immutable after creation; the derived curves are pointwise transforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleGrid {
    xs: Vec<f64>,
}

impl SampleGrid {
    /// Create a grid of `samples` points starting at 0 with the given step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `samples` is zero or `step` is not a
    /// positive finite number.
    pub fn new(samples: usize, step: f64) -> SimResult<Self> {
        if samples == 0 {
            return Err(SimError::invalid_argument("sample count must be positive"));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SimError::invalid_argument(format!(
                "step must be positive and finite, got {step}"
            )));
        }

        let xs = (0..samples).map(|i| i as f64 * step).collect();
        Ok(Self { xs })
    }

    /// The sample points in order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.xs
    }

    /// Number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if empty (never true for a constructed grid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// A curve y = x/(x+k) for a fixed positive offset k.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RationalCurve {
    offset: f64,
}

impl RationalCurve {
    /// Create the curve with the given offset k.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the offset is not a positive finite
    /// number (the formula would not be total on [0, 1) otherwise).
    pub fn new(offset: f64) -> SimResult<Self> {
        if !offset.is_finite() || offset <= 0.0 {
            return Err(SimError::invalid_argument(format!(
                "curve offset must be positive and finite, got {offset}"
            )));
        }
        Ok(Self { offset })
    }

    /// Get the offset k.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Evaluate y = x/(x+k) at one point.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        x / (x + self.offset)
    }

    /// Evaluate the curve over a grid, producing (x, y) pairs.
    #[must_use]
    pub fn sample(&self, grid: &SampleGrid) -> Vec<(f64, f64)> {
        grid.values().iter().map(|&x| (x, self.eval(x))).collect()
    }

    /// Display label in the form "y=x/(x+k)".
    #[must_use]
    pub fn label(&self) -> String {
        // Offsets are small integers in practice; print them without a
        // trailing ".0" so labels read "y=x/(x+1)".
        if self.offset.fract() == 0.0 {
            format!("y=x/(x+{})", self.offset as i64)
        } else {
            format!("y=x/(x+{})", self.offset)
        }
    }
}

/// Build the three scale-dependence series over a shared grid.
///
/// Colors follow the original chart: k=1 red, k=2 blue, k=3 green.
///
/// # Errors
///
/// Never fails for the fixed offsets used here; the `Result` is kept so the
/// call site composes with the rest of the pipeline.
pub fn scale_dependence_family(grid: &SampleGrid) -> SimResult<Vec<Series>> {
    let family = [
        (1.0, SeriesColor::Red),
        (2.0, SeriesColor::Blue),
        (3.0, SeriesColor::Green),
    ];

    family
        .into_iter()
        .map(|(offset, color)| {
            let curve = RationalCurve::new(offset)?;
            Ok(Series {
                label: curve.label(),
                color,
                points: curve.sample(grid),
            })
        })
        .collect()
}
