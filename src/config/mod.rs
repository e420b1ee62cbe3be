//! Configuration with YAML schema and validation.
//!
//! Both demos run with built-in defaults matching the original experiment and
//! take no command-line arguments; the YAML layer exists so a run can be
//! reconfigured (different probability, seed, output path) without editing
//! code. Mistakes are caught twice: schema validation via `validator` derive
//! and semantic validation for cross-field constraints.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domains::counting::TrialCounter;
use crate::engine::rng::SimRng;
use crate::error::{SimError, SimResult};
use crate::visualization::HistogramSpec;

/// Top-level configuration for both demos.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Scale-dependence chart configuration.
    #[validate(nested)]
    #[serde(default)]
    pub curves: CurvesConfig,

    /// Counting-process configuration.
    #[validate(nested)]
    #[serde(default)]
    pub counting: CountingConfig,

    /// Histogram animation configuration.
    #[validate(nested)]
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl DemoConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SimResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> DemoConfigBuilder {
        DemoConfigBuilder::default()
    }

    /// Validate cross-field constraints beyond the schema.
    fn validate_semantic(&self) -> SimResult<()> {
        if !self.curves.step.is_finite() || self.curves.step <= 0.0 {
            return Err(SimError::config(format!(
                "curve step must be positive and finite, got {}",
                self.curves.step
            )));
        }
        if self.curves.x_range.0 >= self.curves.x_range.1 {
            return Err(SimError::config("curve x range must be non-empty"));
        }
        if self.animation.bin_range.0 >= self.animation.bin_range.1 {
            return Err(SimError::config("histogram bin range must be non-empty"));
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            curves: CurvesConfig::default(),
            counting: CountingConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct DemoConfigBuilder {
    seed: Option<u64>,
    success_probability: Option<f64>,
    trials_per_interval: Option<usize>,
    repetitions: Option<usize>,
    fps: Option<u32>,
}

impl DemoConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-trial success probability.
    #[must_use]
    pub const fn success_probability(mut self, p: f64) -> Self {
        self.success_probability = Some(p);
        self
    }

    /// Set the number of trials per interval.
    #[must_use]
    pub const fn trials_per_interval(mut self, trials: usize) -> Self {
        self.trials_per_interval = Some(trials);
        self
    }

    /// Set the number of repetitions.
    #[must_use]
    pub const fn repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = Some(repetitions);
        self
    }

    /// Set the animation frame rate.
    #[must_use]
    pub const fn fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> DemoConfig {
        let mut config = DemoConfig::default();

        config.counting.seed = self.seed.or(config.counting.seed);
        if let Some(p) = self.success_probability {
            config.counting.success_probability = p;
        }
        if let Some(trials) = self.trials_per_interval {
            config.counting.trials_per_interval = trials;
        }
        if let Some(repetitions) = self.repetitions {
            config.counting.repetitions = repetitions;
        }
        if let Some(fps) = self.fps {
            config.animation.fps = fps;
        }

        config
    }
}

/// Scale-dependence chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CurvesConfig {
    /// Number of sample points.
    #[validate(range(min = 1))]
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Spacing between sample points.
    #[serde(default = "default_step")]
    pub step: f64,

    /// X axis range.
    #[serde(default = "default_x_range")]
    pub x_range: (f64, f64),

    /// Output image path.
    #[serde(default = "default_chart_output")]
    pub output: PathBuf,
}

fn default_samples() -> usize {
    10
}

fn default_step() -> f64 {
    0.1
}

fn default_x_range() -> (f64, f64) {
    (0.0, 1.0)
}

fn default_chart_output() -> PathBuf {
    PathBuf::from("scale_dependence.png")
}

impl Default for CurvesConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            step: default_step(),
            x_range: default_x_range(),
            output: default_chart_output(),
        }
    }
}

/// Counting-process configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CountingConfig {
    /// Probability of receiving a photon within one trial (p → 0).
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_success_probability")]
    pub success_probability: f64,

    /// Number of trials per interval (n → ∞).
    #[validate(range(min = 1))]
    #[serde(default = "default_trials")]
    pub trials_per_interval: usize,

    /// Number of intervals to simulate.
    #[validate(range(min = 1))]
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,

    /// Explicit seed; `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Output path for the per-interval results (JSON Lines).
    #[serde(default = "default_counts_output")]
    pub counts_output: PathBuf,
}

fn default_success_probability() -> f64 {
    3.0e-3
}

fn default_trials() -> usize {
    1000
}

fn default_repetitions() -> usize {
    1000
}

fn default_counts_output() -> PathBuf {
    PathBuf::from("poisson_counts.jsonl")
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            success_probability: default_success_probability(),
            trials_per_interval: default_trials(),
            repetitions: default_repetitions(),
            seed: None,
            counts_output: default_counts_output(),
        }
    }
}

impl CountingConfig {
    /// Build the trial counter described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for out-of-range parameters.
    pub fn counter(&self) -> SimResult<TrialCounter> {
        TrialCounter::new(self.success_probability, self.trials_per_interval)
    }

    /// Build the random source: seeded if a seed is configured, otherwise
    /// from OS entropy.
    #[must_use]
    pub fn rng(&self) -> SimRng {
        self.seed.map_or_else(SimRng::from_entropy, SimRng::new)
    }
}

/// Histogram animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnimationConfig {
    /// Output path for the animated histogram.
    #[serde(default = "default_animation_output")]
    pub output: PathBuf,

    /// Frames per second.
    #[validate(range(min = 1))]
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Histogram bin range `[lo, hi)`.
    #[serde(default = "default_bin_range")]
    pub bin_range: (u64, u64),
}

fn default_animation_output() -> PathBuf {
    PathBuf::from("poisson_hist.gif")
}

fn default_fps() -> u32 {
    5
}

fn default_bin_range() -> (u64, u64) {
    (0, 8)
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            output: default_animation_output(),
            fps: default_fps(),
            bin_range: default_bin_range(),
        }
    }
}

impl AnimationConfig {
    /// Build the histogram spec described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Config` for an empty bin range or zero frame rate.
    pub fn histogram_spec(&self) -> SimResult<HistogramSpec> {
        HistogramSpec::new(self.bin_range, self.fps)
    }
}
